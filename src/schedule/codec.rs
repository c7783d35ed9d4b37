//! Range/cell codec.
//!
//! Converts between the storage representation (a list of disjoint time
//! ranges, each carrying one scalar) and the editor/grid representation
//! (a dense array with one value per timeline slot), in both directions.
//! Used for massagist availability (integer counts) and booking
//! constraints (boolean restricted flags).

use super::timeline::Timeline;
use crate::error::{AppError, AppResult};

/// A contiguous time span carrying one scalar value.
///
/// Times are serialized with seconds precision (`HH:MM:00`); decoding reads
/// only the `HH:MM` part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRange<T> {
    pub initial_time: String,
    pub end_time: String,
    pub value: T,
}

/// What to do with a range whose boundaries do not fall on a slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeMode {
    /// Skip the range, count it, keep going
    Lenient,
    /// Fail the whole decode
    Strict,
}

/// Decode result: the dense cell array plus the number of skipped ranges
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded<T> {
    pub cells: Vec<T>,
    pub skipped: usize,
}

/// Resolve a range end time to a cell boundary index (0..=len).
///
/// An end equal to the sentinel means the range reaches past the last slot.
/// This is checked before the label lookup: on inclusive-end timelines the
/// sentinel collides with the last label, and resolving it to `len`
/// preserves the array round-trip for runs covering the last slot.
fn end_index(timeline: &Timeline, end_time: &str) -> Option<usize> {
    let hhmm = end_time.get(0..5)?;
    if hhmm == timeline.sentinel() {
        return Some(timeline.len());
    }
    timeline.index_of(hhmm)
}

/// Decode a range list into one value per timeline slot.
///
/// Slots touched by no range keep `T::default()`. Ranges are assumed
/// disjoint in well-formed data, but overlaps do not fail: later ranges
/// overwrite earlier ones. The result always has exactly `timeline.len()`
/// entries.
pub fn decode<T: Copy + Default>(
    ranges: &[RawRange<T>],
    timeline: &Timeline,
    mode: DecodeMode,
) -> AppResult<Decoded<T>> {
    let mut cells = vec![T::default(); timeline.len()];
    let mut skipped = 0;

    for range in ranges {
        let start = timeline.index_of(&range.initial_time);
        let end = end_index(timeline, &range.end_time);

        let (start, end) = match (start, end) {
            (Some(s), Some(e)) => (s, e),
            _ => {
                match mode {
                    DecodeMode::Lenient => {
                        tracing::warn!(
                            initial_time = %range.initial_time,
                            end_time = %range.end_time,
                            "skipping range not aligned to timeline"
                        );
                        skipped += 1;
                        continue;
                    }
                    DecodeMode::Strict => {
                        return Err(AppError::Validation(format!(
                            "range {}-{} is not aligned to the timeline",
                            range.initial_time, range.end_time
                        )));
                    }
                }
            }
        };

        for cell in cells.iter_mut().take(end).skip(start) {
            *cell = range.value;
        }
    }

    Ok(Decoded { cells, skipped })
}

/// Encode a dense cell array into maximal equal-valued ranges.
///
/// Output ranges are disjoint, ordered by start time and in normal form:
/// no two adjacent ranges carry the same value. A run reaching the last
/// slot ends at the timeline's sentinel.
pub fn encode<T: Copy + PartialEq>(
    cells: &[T],
    timeline: &Timeline,
) -> AppResult<Vec<RawRange<T>>> {
    if cells.len() != timeline.len() {
        return Err(AppError::Validation(format!(
            "cell array length {} does not match timeline length {}",
            cells.len(),
            timeline.len()
        )));
    }

    let mut ranges = Vec::new();
    let mut i = 0;
    while i < cells.len() {
        let value = cells[i];
        let mut j = i + 1;
        while j < cells.len() && cells[j] == value {
            j += 1;
        }
        ranges.push(RawRange {
            initial_time: timeline.boundary(i),
            end_time: timeline.boundary(j),
            value,
        });
        i = j;
    }

    Ok(ranges)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn five_slots() -> Timeline {
        Timeline::with_slots("10:00", 30, 5).unwrap()
    }

    #[test]
    fn encode_produces_normal_form() {
        let t = five_slots();
        let ranges = encode(&[2, 2, 0, 0, 3], &t).unwrap();
        assert_eq!(
            ranges,
            vec![
                RawRange { initial_time: "10:00:00".into(), end_time: "11:00:00".into(), value: 2 },
                RawRange { initial_time: "11:00:00".into(), end_time: "12:00:00".into(), value: 0 },
                RawRange { initial_time: "12:00:00".into(), end_time: "12:30:00".into(), value: 3 },
            ]
        );
        for pair in ranges.windows(2) {
            assert_ne!(pair[0].value, pair[1].value);
        }
    }

    #[test]
    fn encode_single_cell_runs() {
        let t = five_slots();
        let ranges = encode(&[1, 2, 1, 2, 1], &t).unwrap();
        assert_eq!(ranges.len(), 5);
        assert_eq!(ranges[0].end_time, "10:30:00");
    }

    #[test]
    fn encode_rejects_length_mismatch() {
        let t = five_slots();
        assert!(encode(&[1, 2], &t).is_err());
    }

    #[test]
    fn decode_round_trips_any_aligned_array() {
        let t = five_slots();
        for cells in [
            vec![0, 0, 0, 0, 0],
            vec![2, 2, 0, 0, 3],
            vec![1, 2, 3, 4, 5],
            vec![7, 7, 7, 7, 7],
            vec![0, 1, 0, 1, 0],
        ] {
            let ranges = encode(&cells, &t).unwrap();
            let decoded = decode(&ranges, &t, DecodeMode::Lenient).unwrap();
            assert_eq!(decoded.cells, cells);
            assert_eq!(decoded.skipped, 0);
        }
    }

    #[test]
    fn bool_round_trip() {
        let t = five_slots();
        let cells = vec![false, true, true, false, true];
        let ranges = encode(&cells, &t).unwrap();
        let decoded = decode(&ranges, &t, DecodeMode::Lenient).unwrap();
        assert_eq!(decoded.cells, cells);
    }

    #[test]
    fn round_trip_on_inclusive_end_timeline() {
        // 10:00-22:00 step 30: sentinel collides with the last label
        let t = Timeline::new("10:00", "22:00", 30).unwrap();
        let mut cells = vec![0; 25];
        cells[0] = 2;
        cells[24] = 4;
        let ranges = encode(&cells, &t).unwrap();
        assert_eq!(ranges.last().unwrap().end_time, "22:00:00");
        let decoded = decode(&ranges, &t, DecodeMode::Lenient).unwrap();
        assert_eq!(decoded.cells, cells);
    }

    #[test]
    fn decode_skips_misaligned_range_in_lenient_mode() {
        let t = five_slots();
        let ranges = vec![
            RawRange { initial_time: "10:15:00".into(), end_time: "11:00:00".into(), value: 9 },
            RawRange { initial_time: "11:00:00".into(), end_time: "12:00:00".into(), value: 1 },
        ];
        let decoded = decode(&ranges, &t, DecodeMode::Lenient).unwrap();
        assert_eq!(decoded.cells, vec![0, 0, 1, 1, 0]);
        assert_eq!(decoded.skipped, 1);
    }

    #[test]
    fn decode_rejects_misaligned_range_in_strict_mode() {
        let t = five_slots();
        let ranges = vec![RawRange {
            initial_time: "10:15:00".into(),
            end_time: "11:00:00".into(),
            value: 9,
        }];
        assert!(decode(&ranges, &t, DecodeMode::Strict).is_err());
    }

    #[test]
    fn decode_overlap_is_last_write_wins() {
        let t = five_slots();
        let ranges = vec![
            RawRange { initial_time: "10:00:00".into(), end_time: "12:30:00".into(), value: 1 },
            RawRange { initial_time: "11:00:00".into(), end_time: "12:00:00".into(), value: 5 },
        ];
        let decoded = decode(&ranges, &t, DecodeMode::Lenient).unwrap();
        assert_eq!(decoded.cells, vec![1, 1, 5, 5, 1]);
    }

    #[test]
    fn decode_reads_only_hhmm() {
        let t = five_slots();
        let ranges = vec![RawRange {
            initial_time: "10:30:45".into(),
            end_time: "11:30:59".into(),
            value: 3,
        }];
        let decoded = decode(&ranges, &t, DecodeMode::Lenient).unwrap();
        assert_eq!(decoded.cells, vec![0, 3, 3, 0, 0]);
    }

    #[test]
    fn decode_empty_ranges_is_all_default() {
        let t = five_slots();
        let decoded = decode::<i32>(&[], &t, DecodeMode::Strict).unwrap();
        assert_eq!(decoded.cells, vec![0; 5]);
    }
}
