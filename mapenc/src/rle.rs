//! Run-length encoding of a binary grid into one character per run.
//!
//! A run of `length` cells becomes the character with code `126 - length`, so
//! `~` is unused, `}` is a run of one and `!` a run of 93. Runs longer than 94
//! land in the control range and runs longer than 126 have no character at all.
//! The string carries neither the grid size nor the value of the first run, so
//! [`decode`] must be told both.
use crate::error::*;

/// Code of the character a run of length zero would map to.
pub const RUN_CODE_BASE: u32 = 126;

/// First printable (non-control) character code.
const PRINTABLE_MIN: u32 = 32;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Run {
    pub value: u8,
    pub length: usize,
}

/// Splits `cells` into maximal runs of equal values, in order.
pub fn runs(cells: &[u8]) -> Result<Vec<Run>, Error> {
    let mut out: Vec<Run> = Vec::new();
    for (idx, &value) in cells.iter().enumerate() {
        if value > 1 {
            return Err(Error::InvalidInput(format!(
                "{ERROR_NON_BINARY}: {value} at index {idx}"
            )));
        }
        match out.last_mut() {
            Some(run) if run.value == value => run.length += 1,
            _ => out.push(Run { value, length: 1 }),
        }
    }
    Ok(out)
}

/// Maps a run length to its character.
pub fn run_char(length: usize) -> Result<char, Error> {
    let code = u32::try_from(length)
        .ok()
        .and_then(|length| RUN_CODE_BASE.checked_sub(length))
        .ok_or_else(|| Error::Encoding(format!("{ERROR_RUN_LENGTH}: {length}")))?;

    if code < PRINTABLE_MIN {
        log::warn!("run of {length} maps to control character {code:#04x}");
    }

    char::from_u32(code).ok_or_else(|| Error::Encoding(format!("{ERROR_RUN_LENGTH}: {length}")))
}

pub fn encode(cells: &[u8]) -> Result<String, Error> {
    let runs = runs(cells)?;
    log::debug!("{} cells in {} runs", cells.len(), runs.len());
    runs.iter().map(|run| run_char(run.length)).collect()
}

/// Rebuilds `len` cells from `encoded`, the first run holding `first_value`.
pub fn decode(encoded: &str, first_value: u8, len: usize) -> Result<Vec<u8>, Error> {
    if first_value > 1 {
        return Err(Error::InvalidInput(format!(
            "{ERROR_NON_BINARY}: first value {first_value}"
        )));
    }

    let mut cells = Vec::with_capacity(len);
    let mut value = first_value;
    for ch in encoded.chars() {
        let code = ch as u32;
        let length = match RUN_CODE_BASE.checked_sub(code) {
            Some(length) if length > 0 => length as usize,
            _ => {
                return Err(Error::InvalidInput(format!(
                    "{ERROR_DECODE}: {ch:?} is not a run character"
                )));
            }
        };
        if cells.len() + length > len {
            return Err(Error::InvalidInput(format!(
                "{ERROR_DECODE}: runs exceed {len} cells"
            )));
        }
        cells.extend(std::iter::repeat_n(value, length));
        value ^= 1;
    }

    if cells.len() != len {
        return Err(Error::InvalidInput(format!(
            "{ERROR_DECODE}: decoded {} of {len} cells",
            cells.len()
        )));
    }
    Ok(cells)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Deterministic pseudo-random binary grid with runs of varying length.
    fn noisy_grid(seed: u64, len: usize) -> Vec<u8> {
        let mut state = seed;
        let mut value = (seed & 1) as u8;
        let mut cells = Vec::with_capacity(len);
        while cells.len() < len {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            let run = 1 + ((state >> 33) % 40) as usize;
            let run = run.min(len - cells.len());
            cells.extend(std::iter::repeat_n(value, run));
            value ^= 1;
        }
        cells
    }

    #[test]
    fn test_mixed_runs() {
        let cells = [1, 1, 1, 0, 0, 1];
        let lengths: Vec<usize> = runs(&cells).unwrap().iter().map(|r| r.length).collect();
        assert_eq!(lengths, vec![3, 2, 1]);
        assert_eq!(encode(&cells).unwrap(), "{|}");
    }

    #[test]
    fn test_single_run() {
        assert_eq!(encode(&[0, 0, 0, 0]).unwrap(), "z");
    }

    #[test]
    fn test_empty_input() {
        assert!(runs(&[]).unwrap().is_empty());
        assert_eq!(encode(&[]).unwrap(), "");
        assert_eq!(decode("", 0, 0).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_non_binary_is_rejected() {
        assert!(matches!(encode(&[0, 1, 2]), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_run_values_alternate() {
        let values: Vec<u8> = runs(&[0, 1, 1, 0, 1]).unwrap().iter().map(|r| r.value).collect();
        assert_eq!(values, vec![0, 1, 0, 1]);
    }

    #[test]
    fn test_long_runs_keep_literal_codes() {
        assert_eq!(run_char(1).unwrap(), '}');
        assert_eq!(run_char(94).unwrap(), ' ');
        assert_eq!(run_char(95).unwrap(), '\u{1f}');
        assert_eq!(run_char(126).unwrap(), '\0');
        assert!(matches!(run_char(127), Err(Error::Encoding(_))));
    }

    #[test]
    fn test_partition_and_round_trip() {
        for seed in 0..32 {
            let cells = noisy_grid(seed, 500);
            let encoded = encode(&cells).unwrap();
            let total: usize = runs(&cells).unwrap().iter().map(|r| r.length).sum();
            assert_eq!(total, cells.len());
            assert!(encoded.chars().count() <= cells.len());
            assert_eq!(encoded, encode(&cells).unwrap());
            assert_eq!(decode(&encoded, cells[0], cells.len()).unwrap(), cells);
        }
    }

    #[test]
    fn test_alternating_grid_has_one_char_per_cell() {
        let cells: Vec<u8> = (0..50).map(|i| (i % 2) as u8).collect();
        let encoded = encode(&cells).unwrap();
        assert_eq!(encoded.chars().count(), cells.len());
        assert!(encoded.chars().all(|c| c == '}'));
    }

    #[test]
    fn test_decode_rejects_wrong_length() {
        assert!(matches!(decode("{|}", 1, 5), Err(Error::InvalidInput(_))));
        assert!(matches!(decode("{|}", 1, 7), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_decode_rejects_non_run_chars() {
        assert!(matches!(decode("~", 0, 0), Err(Error::InvalidInput(_))));
        assert!(matches!(decode("é", 0, 1), Err(Error::InvalidInput(_))));
    }
}
