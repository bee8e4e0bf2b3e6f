// [libs/core/curve/src/point.rs]
/*!
 * =================================================================
 * APARATO: JACOBIAN POINT REPRESENTATION (V1.0)
 * CLASIFICACIÓN: CORE EC KERNEL (ESTRATO L2)
 * RESPONSABILIDAD: COORDENADAS JACOBIANAS (X, Y, Z) ~ AFÍN (X/Z^2, Y/Z^3)
 * =================================================================
 */

use paranoid_models::prelude::AffinePoint;
use rug::Integer;

/// Un punto en coordenadas Jacobianas. `Z == 0` denota el punto al infinito.
/// La representación no es única: (X,Y,Z) y (λ²X, λ³Y, λZ) denotan el mismo
/// punto afín para cualquier λ != 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JacobianPoint {
    pub x: Integer,
    pub y: Integer,
    pub z: Integer,
}

impl JacobianPoint {
    #[must_use]
    pub fn infinity() -> Self {
        Self { x: Integer::from(1), y: Integer::from(1), z: Integer::from(0) }
    }

    #[must_use]
    pub fn is_infinity(&self) -> bool {
        self.z == 0
    }

    #[must_use]
    pub fn from_affine(point: &AffinePoint) -> Self {
        match point {
            AffinePoint::Infinity => Self::infinity(),
            AffinePoint::Finite(x, y) => Self { x: x.clone(), y: y.clone(), z: Integer::from(1) },
        }
    }
}
