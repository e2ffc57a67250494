use derive_more::{Display, Error};

use super::strand::StrandSymbols;
use crate::symbols::Symbol;

/// Why an optional column failed to decode. Decoding is fail-fast: the first
/// offending column is reported and nothing else is attempted.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum OptionalFieldError {
    #[display("invalid {field} field: {value:?} is not an integer")]
    Int { field: &'static str, value: String },
    #[display("invalid Score field: {value} is outside [0, 1000]")]
    Score { value: i64 },
    #[display("invalid Strand field: {value:?} is neither \"+\" nor \"-\"")]
    Strand { value: String },
    #[display("invalid optional field {index}: the BED schema defines 9 optional columns")]
    Column { index: usize, value: String },
}

// Optional column positions, fixed by the BED specification.
const NAME: usize = 0;
const SCORE: usize = 1;
const STRAND: usize = 2;
const THICK_START: usize = 3;
const THICK_END: usize = 4;
const ITEM_RGB: usize = 5;
const BLOCK_COUNT: usize = 6;
const BLOCK_SIZES: usize = 7;
const BLOCK_STARTS: usize = 8;

/// Decoded optional columns of a BED record, one possibly-absent member per
/// schema entry.
///
/// Members are filled strictly left to right during decoding, so the presence of
/// member `i` implies the presence of all members before it. The record is never
/// mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OptionalFields {
    name: Option<String>,
    score: Option<u16>,
    strand: Option<Symbol>,
    thick_start: Option<i64>,
    thick_end: Option<i64>,
    item_rgb: Option<bool>,
    block_count: Option<i64>,
    block_sizes: Option<i64>,
    block_starts: Option<i64>,
}

impl OptionalFields {
    /// Decode raw optional columns, in declaration order.
    ///
    /// Column interpretation is purely positional. Strand literals resolve to the
    /// sentinels carried by `strands`; everything else is a pure function of the
    /// input.
    pub fn decode<S: AsRef<str>>(
        columns: &[S],
        strands: &StrandSymbols,
    ) -> Result<Self, OptionalFieldError> {
        let mut decoded = Self::default();
        for (index, column) in columns.iter().enumerate() {
            let value = column.as_ref();
            match index {
                NAME => decoded.name = Some(value.to_owned()),
                SCORE => {
                    let score = parse_int("Score", value)?;
                    if !(0..=1000).contains(&score) {
                        return Err(OptionalFieldError::Score { value: score });
                    }
                    decoded.score = Some(score as u16);
                }
                STRAND => decoded.strand = Some(strands.resolve(value)?),
                THICK_START => decoded.thick_start = Some(parse_int("ThickStart", value)?),
                THICK_END => decoded.thick_end = Some(parse_int("ThickEnd", value)?),
                // "on" turns the flag on, any other literal is an off switch.
                ITEM_RGB => decoded.item_rgb = Some(value == "on"),
                BLOCK_COUNT => decoded.block_count = Some(parse_int("BlockCount", value)?),
                BLOCK_SIZES => decoded.block_sizes = Some(parse_int("BlockSizes", value)?),
                BLOCK_STARTS => decoded.block_starts = Some(parse_int("BlockStarts", value)?),
                _ => {
                    return Err(OptionalFieldError::Column {
                        index,
                        value: value.to_owned(),
                    })
                }
            }
        }
        Ok(decoded)
    }

    /// Number of present members, 0 to 9.
    pub fn len(&self) -> usize {
        [
            self.name.is_some(),
            self.score.is_some(),
            self.strand.is_some(),
            self.thick_start.is_some(),
            self.thick_end.is_some(),
            self.item_rgb.is_some(),
            self.block_count.is_some(),
            self.block_sizes.is_some(),
            self.block_starts.is_some(),
        ]
        .into_iter()
        .filter(|present| *present)
        .count()
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn score(&self) -> Option<u16> {
        self.score
    }

    pub fn strand(&self) -> Option<&Symbol> {
        self.strand.as_ref()
    }

    pub fn thick_start(&self) -> Option<i64> {
        self.thick_start
    }

    pub fn thick_end(&self) -> Option<i64> {
        self.thick_end
    }

    pub fn item_rgb(&self) -> Option<bool> {
        self.item_rgb
    }

    pub fn block_count(&self) -> Option<i64> {
        self.block_count
    }

    pub fn block_sizes(&self) -> Option<i64> {
        self.block_sizes
    }

    pub fn block_starts(&self) -> Option<i64> {
        self.block_starts
    }
}

fn parse_int(field: &'static str, value: &str) -> Result<i64, OptionalFieldError> {
    value.parse().map_err(|_| OptionalFieldError::Int {
        field,
        value: value.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use eyre::Result;

    use super::*;
    use crate::symbols::SymbolTable;

    const COLUMNS: &[&str] = &["geneA", "500", "+", "100", "200", "on", "2", "10", "0"];

    fn strands() -> StrandSymbols {
        StrandSymbols::new(&mut SymbolTable::new())
    }

    #[test]
    fn test_decode_all_prefixes() -> Result<()> {
        let strands = strands();
        for take in 0..=COLUMNS.len() {
            let decoded = OptionalFields::decode(&COLUMNS[..take], &strands)?;
            assert_eq!(decoded.len(), take);
            assert_eq!(decoded.is_empty(), take == 0);
        }

        let decoded = OptionalFields::decode(COLUMNS, &strands)?;
        assert_eq!(decoded.name(), Some("geneA"));
        assert_eq!(decoded.score(), Some(500));
        assert_eq!(decoded.strand(), Some(strands.forward()));
        assert_eq!(decoded.thick_start(), Some(100));
        assert_eq!(decoded.thick_end(), Some(200));
        assert_eq!(decoded.item_rgb(), Some(true));
        assert_eq!(decoded.block_count(), Some(2));
        assert_eq!(decoded.block_sizes(), Some(10));
        assert_eq!(decoded.block_starts(), Some(0));
        Ok(())
    }

    #[test]
    fn test_score_bounds() -> Result<()> {
        let strands = strands();
        for score in ["0", "1000"] {
            let decoded = OptionalFields::decode(&["name", score], &strands)?;
            assert_eq!(decoded.score(), Some(score.parse()?));
        }

        for score in ["-1", "1001"] {
            assert_eq!(
                OptionalFields::decode(&["name", score], &strands),
                Err(OptionalFieldError::Score {
                    value: score.parse()?
                })
            );
        }
        assert_eq!(
            OptionalFields::decode(&["name", "abc"], &strands),
            Err(OptionalFieldError::Int {
                field: "Score",
                value: "abc".to_owned()
            })
        );
        Ok(())
    }

    #[test]
    fn test_strand_resolves_to_sentinels() -> Result<()> {
        let strands = strands();
        let forward = OptionalFields::decode(&["name", "0", "+"], &strands)?;
        assert_eq!(forward.strand(), Some(strands.forward()));
        assert_ne!(forward.strand(), Some(strands.reverse()));

        let reverse = OptionalFields::decode(&["name", "0", "-"], &strands)?;
        assert_eq!(reverse.strand(), Some(strands.reverse()));

        assert_eq!(
            OptionalFields::decode(&["name", "0", "."], &strands),
            Err(OptionalFieldError::Strand {
                value: ".".to_owned()
            })
        );
        Ok(())
    }

    #[test]
    fn test_integer_fields_accept_negatives() -> Result<()> {
        let strands = strands();
        let decoded = OptionalFields::decode(
            &["name", "0", "+", "-10", "-1", "off", "-2", "-30", "-40"],
            &strands,
        )?;
        assert_eq!(decoded.thick_start(), Some(-10));
        assert_eq!(decoded.thick_end(), Some(-1));
        assert_eq!(decoded.block_count(), Some(-2));
        assert_eq!(decoded.block_sizes(), Some(-30));
        assert_eq!(decoded.block_starts(), Some(-40));

        for (index, field) in [
            (3, "ThickStart"),
            (4, "ThickEnd"),
            (6, "BlockCount"),
            (7, "BlockSizes"),
            (8, "BlockStarts"),
        ] {
            let mut columns = COLUMNS.to_vec();
            columns[index] = "12.5";
            assert_eq!(
                OptionalFields::decode(&columns, &strands),
                Err(OptionalFieldError::Int {
                    field,
                    value: "12.5".to_owned()
                })
            );
        }
        Ok(())
    }

    #[test]
    fn test_item_rgb_never_fails() -> Result<()> {
        let strands = strands();
        for (value, expected) in [("on", true), ("off", false), ("", false), ("ON", false)] {
            let decoded =
                OptionalFields::decode(&["name", "0", "+", "1", "2", value], &strands)?;
            assert_eq!(decoded.item_rgb(), Some(expected));
        }
        Ok(())
    }

    #[test]
    fn test_tenth_column_always_fails() {
        let strands = strands();
        for extra in ["anything", "", "0"] {
            let mut columns = COLUMNS.to_vec();
            columns.push(extra);
            assert_eq!(
                OptionalFields::decode(&columns, &strands),
                Err(OptionalFieldError::Column {
                    index: 9,
                    value: extra.to_owned()
                })
            );
        }
    }

    #[test]
    fn test_fail_fast_reports_first_offender() {
        let strands = strands();
        // Both the score and the strand are broken; only the score is reported.
        assert_eq!(
            OptionalFields::decode(&["name", "5000", "?"], &strands),
            Err(OptionalFieldError::Score { value: 5000 })
        );
    }
}
