// Format specification: https://genome.ucsc.edu/FAQ/FAQformat.html#format1

// Mandatory columns:
// 1. chrom
// 2. start
// 3. end

// Optional columns, in declaration order:
// 4. name: free-form string
// 5. score: integer in [0, 1000]
// 6. strand: [+|-]
// 7. thickStart: integer
// 8. thickEnd: integer
// 9. itemRgb: "on" | anything else
// 10. blockCount: integer
// 11. blockSizes: integer
// 12. blockStarts: integer

// Optional columns are declared monotonically: a record with column i carries
// all columns before i as well.

pub use container::Bed;
pub use fields::{OptionalFieldError, OptionalFields};
pub use region::Region;
pub use strand::StrandSymbols;
pub use track::Track;

mod container;
mod fields;
mod region;
mod strand;
mod track;
