// [libs/core/curve/src/lib.rs]
/*!
 * =================================================================
 * APARATO: PARANOID-CORE-CURVE (V1.0)
 * CLASIFICACIÓN: CORE EC KERNEL (ESTRATO L2)
 * RESPONSABILIDAD: ARITMÉTICA DE CURVA ELÍPTICA GENERALIZADA Y
 *                   LOGARITMO DISCRETO POR LOTES (§4.D)
 * =================================================================
 */

pub mod curve;
pub mod dl;
pub mod errors;
pub mod field;
pub mod point;
pub mod registry;

pub mod prelude {
    pub use crate::curve::Curve;
    pub use crate::dl::{
        batch_dl, batch_dl_of_differences, extended_batch_dl, hidden_number_params, transform_order_len,
    };
    pub use crate::errors::CurveError;
    pub use crate::field;
    pub use crate::point::JacobianPoint;
    pub use crate::registry::{approved_curve_ids, lookup, GLOBAL_CURVE_REGISTRY};
    pub use rug::Integer;
}
