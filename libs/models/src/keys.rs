// [libs/models/src/keys.rs]
/*!
 * =================================================================
 * APARATO: ARTIFACT TYPES (V1.0)
 * CLASIFICACIÓN: SHARED DATA MODEL (ESTRATO L1)
 * RESPONSABILIDAD: RSAKEY, CURVEPARAMS, ECKEY, ECDSASIGNATURE
 *
 * Los artefactos son creados por el llamador, mutados únicamente por el
 * motor escribiendo en su `TestInfo`, y destruidos por el llamador. El
 * motor no posee ningún artefacto.
 * =================================================================
 */

use crate::errors::ModelError;
use rug::Integer;

/// Un punto afín sobre una curva de Weierstrass corta, o el punto al
/// infinito. La representación Jacobiana vive en `paranoid-core-curve`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AffinePoint {
    Finite(Integer, Integer),
    Infinity,
}

/// Parámetros de una curva de Weierstrass corta `y^2 = x^3 + a*x + b (mod p)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurveParams {
    pub curve_id: String,
    pub a: Integer,
    pub b: Integer,
    pub p: Integer,
    pub g: (Integer, Integer),
    pub n: Integer,
    pub h: Integer,
}

/// Una clave pública RSA: módulo `n`, exponente `e`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaKey {
    pub n: Integer,
    pub e: Integer,
}

impl RsaKey {
    /// Valida los invariantes mínimos del §3: `n` impar, `n >= 2`, `e` impar `>= 3`.
    /// Las políticas de tamaño/exponente adicionales viven en los chequeos,
    /// no en el constructor.
    pub fn new(n: Integer, e: Integer) -> Result<Self, ModelError> {
        if n < 2 || n.is_even() {
            return Err(ModelError::InvalidInput("RSA modulus must be odd and >= 2".into()));
        }
        if e < 3 || e.is_even() {
            return Err(ModelError::InvalidInput("RSA exponent must be odd and >= 3".into()));
        }
        Ok(Self { n, e })
    }

    #[must_use]
    pub fn bit_length(&self) -> u32 {
        self.n.significant_bits()
    }
}

/// Una clave pública EC: identificador de curva y coordenadas afines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EcKey {
    pub curve_id: String,
    pub point: AffinePoint,
}

impl EcKey {
    #[must_use]
    pub fn new(curve_id: impl Into<String>, x: Integer, y: Integer) -> Self {
        Self { curve_id: curve_id.into(), point: AffinePoint::Finite(x, y) }
    }
}

/// Una firma ECDSA junto con la clave del emisor y el hash del mensaje.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EcdsaSignature {
    pub algorithm: String,
    pub r: Integer,
    pub s: Integer,
    pub message_hash: Integer,
    pub issuer: EcKey,
}

impl EcdsaSignature {
    pub fn new(
        algorithm: impl Into<String>,
        r: Integer,
        s: Integer,
        message_hash: Integer,
        issuer: EcKey,
    ) -> Result<Self, ModelError> {
        if r <= 0 || s <= 0 {
            return Err(ModelError::InvalidInput("ECDSA (r, s) must be strictly positive".into()));
        }
        Ok(Self { algorithm: algorithm.into(), r, s, message_hash, issuer })
    }
}
