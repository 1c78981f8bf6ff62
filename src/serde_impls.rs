use serde::{Serialize, Serializer};

use crate::table::RatioTable;

// A table serializes as its ratio sequence in exponent order. The
// configuration that produced it round-trips separately through
// `RatioTableBuilder`, which derives both traits.
impl Serialize for RatioTable {
    fn serialize<Sr>(&self, serializer: Sr) -> Result<Sr::Ok, Sr::Error>
    where
        Sr: Serializer,
    {
        serializer.collect_seq(self.ratios())
    }
}
