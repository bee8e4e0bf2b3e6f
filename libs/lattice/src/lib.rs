// [libs/lattice/src/lib.rs]
/*!
 * =================================================================
 * APARATO: PARANOID-LATTICE (V1.0)
 * CLASIFICACIÓN: LATTICE ATTACKS (ESTRATO L3)
 * RESPONSABILIDAD: REDUCTOR LLL LOCAL + HNP + CR50 U2F + CHECKFRACTION
 * =================================================================
 */

pub mod cr50;
pub mod errors;
pub mod fraction;
pub mod hnp;
pub mod lll;

pub mod prelude {
    pub use crate::cr50::{solve_cr50_u2f, EcdsaSample};
    pub use crate::errors::LatticeError;
    pub use crate::fraction::check_fraction;
    pub use crate::hnp::{
        solve as solve_hnp, solve_for_curve_with_catalog, solve_with_lcg_catalog, BiasKind,
        LcgCatalogEntry, LcgConstants, SearchStrategy,
    };
    pub use crate::lll::lll_reduce;
    pub use rug::Integer;
}
