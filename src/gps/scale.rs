//! Scale divisors from a sibling `SCAL` item.

use log::debug;

use crate::klv::payload::as_f64_vec;
use crate::tree::GpmfTree;
use crate::FourCC;

/// Scale factors applied elementwise to a GPS payload's raw integers.
/// Missing entries (including a wholly absent `SCAL`) default to `1.0`
/// rather than indexing past the end.
pub struct Scales(Vec<f64>);

impl Scales {
    /// Read `SCAL` from the GPS-bearing stream's sibling items.
    pub fn from_stream(strm: &GpmfTree) -> Self {
        match strm.leaf(&FourCC::SCAL) {
            Some(item) => {
                let values = as_f64_vec(item);
                if values.is_empty() {
                    debug!("SCAL present but empty, defaulting all scales to 1.0");
                    Scales(vec![1.0])
                } else {
                    Scales(values)
                }
            }
            None => {
                debug!("SCAL absent, defaulting all scales to 1.0");
                Scales(vec![1.0])
            }
        }
    }

    /// Scale at `index`, or `1.0` if `index` is out of bounds.
    pub fn get(&self, index: usize) -> f64 {
        self.0.get(index).copied().unwrap_or(1.0)
    }
}
