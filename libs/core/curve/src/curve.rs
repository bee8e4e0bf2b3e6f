// [libs/core/curve/src/curve.rs]
/*!
 * =================================================================
 * APARATO: UNIFIED CURVE ENGINE (V1.0)
 * CLASIFICACIÓN: CORE EC KERNEL (ESTRATO L2)
 * RESPONSABILIDAD: ARITMÉTICA AFÍN/JACOBIANA Y OPERACIONES POR LOTES
 *
 * Generaliza el motor de curva fija (secp256k1, limbs de 256 bits) de la
 * línea original a un motor parametrizado por `CurveParams`, de modo que
 * la misma implementación sirva P-192 hasta P-521 y la familia Brainpool.
 * =================================================================
 */

use crate::errors::CurveError;
use crate::field::{self, batch_invert};
use crate::point::JacobianPoint;
use paranoid_models::prelude::{AffinePoint, CurveParams};
use rug::Integer;
use tracing::instrument;

/// Motor de curva: envuelve `CurveParams` y expone la aritmética del grupo.
#[derive(Debug, Clone)]
pub struct Curve {
    pub params: CurveParams,
}

impl Curve {
    #[must_use]
    pub fn new(params: CurveParams) -> Self {
        Self { params }
    }

    fn p(&self) -> &Integer {
        &self.params.p
    }

    /// Verifica `y^2 == x^3 + a*x + b (mod p)`.
    #[must_use]
    pub fn on_curve(&self, point: &AffinePoint) -> bool {
        let AffinePoint::Finite(x, y) = point else { return true };
        let p = self.p();
        let lhs = field::mul_mod(y, y, p);
        let x_cubed = field::mul_mod(&field::mul_mod(x, x, p), x, p);
        let ax = field::mul_mod(&self.params.a, x, p);
        let rhs = field::add_mod(&field::add_mod(&x_cubed, &ax, p), &self.params.b, p);
        lhs == rhs
    }

    #[must_use]
    pub fn negate(&self, point: &AffinePoint) -> AffinePoint {
        match point {
            AffinePoint::Infinity => AffinePoint::Infinity,
            AffinePoint::Finite(x, y) => AffinePoint::Finite(x.clone(), field::neg_mod(y, self.p())),
        }
    }

    /// Suma afín, manejando explícitamente los casos de infinito e igual-x.
    #[must_use]
    pub fn add_affine(&self, a: &AffinePoint, b: &AffinePoint) -> AffinePoint {
        match (a, b) {
            (AffinePoint::Infinity, _) => b.clone(),
            (_, AffinePoint::Infinity) => a.clone(),
            (AffinePoint::Finite(x1, y1), AffinePoint::Finite(x2, y2)) => {
                let p = self.p();
                if x1 == x2 {
                    if field::add_mod(y1, y2, p) == 0 {
                        return AffinePoint::Infinity;
                    }
                    return self.double_affine(a);
                }
                let lambda = field::mul_mod(
                    &field::sub_mod(y2, y1, p),
                    &field::inv_mod(&field::sub_mod(x2, x1, p), p).expect("checked x1 != x2"),
                    p,
                );
                let x3 = field::sub_mod(&field::sub_mod(&field::mul_mod(&lambda, &lambda, p), x1, p), x2, p);
                let y3 = field::sub_mod(&field::mul_mod(&lambda, &field::sub_mod(x1, &x3, p), p), y1, p);
                AffinePoint::Finite(x3, y3)
            }
        }
    }

    #[must_use]
    pub fn double_affine(&self, a: &AffinePoint) -> AffinePoint {
        let AffinePoint::Finite(x, y) = a else { return AffinePoint::Infinity };
        let p = self.p();
        if *y == 0 {
            return AffinePoint::Infinity;
        }
        let three_x2 = field::mul_mod(&Integer::from(3), &field::mul_mod(x, x, p), p);
        let numerator = field::add_mod(&three_x2, &self.params.a, p);
        let denominator = field::inv_mod(&field::mul_mod(&Integer::from(2), y, p), p).expect("2y != 0 checked");
        let lambda = field::mul_mod(&numerator, &denominator, p);
        let x3 = field::sub_mod(&field::mul_mod(&lambda, &lambda, p), &field::mul_mod(&Integer::from(2), x, p), p);
        let y3 = field::sub_mod(&field::mul_mod(&lambda, &field::sub_mod(x, &x3, p), p), y, p);
        AffinePoint::Finite(x3, y3)
    }

    #[must_use]
    pub fn subtract_affine(&self, a: &AffinePoint, b: &AffinePoint) -> AffinePoint {
        self.add_affine(a, &self.negate(b))
    }

    /// Duplicación Jacobiana general (válida para cualquier `a`, no sólo `a=-3`).
    #[must_use]
    pub fn double_jacobian(&self, point: &JacobianPoint) -> JacobianPoint {
        let p = self.p();
        if point.is_infinity() || point.y == 0 {
            return JacobianPoint::infinity();
        }
        let (x, y, z) = (&point.x, &point.y, &point.z);
        let y2 = field::mul_mod(y, y, p);
        let s = field::mul_mod(&Integer::from(4), &field::mul_mod(x, &y2, p), p);
        let z2 = field::mul_mod(z, z, p);
        let z4 = field::mul_mod(&z2, &z2, p);
        let m = field::add_mod(
            &field::mul_mod(&Integer::from(3), &field::mul_mod(x, x, p), p),
            &field::mul_mod(&self.params.a, &z4, p),
            p,
        );
        let x3 = field::sub_mod(&field::mul_mod(&m, &m, p), &field::mul_mod(&Integer::from(2), &s, p), p);
        let y4 = field::mul_mod(&y2, &y2, p);
        let y3 = field::sub_mod(
            &field::mul_mod(&m, &field::sub_mod(&s, &x3, p), p),
            &field::mul_mod(&Integer::from(8), &y4, p),
            p,
        );
        let z3 = field::mul_mod(&Integer::from(2), &field::mul_mod(y, z, p), p);
        JacobianPoint { x: x3, y: y3, z: z3 }
    }

    /// Suma Jacobiana general (ninguno de los dos operandos asume Z=1).
    #[must_use]
    pub fn add_jacobian(&self, a: &JacobianPoint, b: &JacobianPoint) -> JacobianPoint {
        if a.is_infinity() {
            return b.clone();
        }
        if b.is_infinity() {
            return a.clone();
        }
        let p = self.p();
        let z1_sq = field::mul_mod(&a.z, &a.z, p);
        let z2_sq = field::mul_mod(&b.z, &b.z, p);
        let u1 = field::mul_mod(&a.x, &z2_sq, p);
        let u2 = field::mul_mod(&b.x, &z1_sq, p);
        let s1 = field::mul_mod(&a.y, &field::mul_mod(&b.z, &z2_sq, p), p);
        let s2 = field::mul_mod(&b.y, &field::mul_mod(&a.z, &z1_sq, p), p);

        if u1 == u2 {
            if s1 != s2 {
                return JacobianPoint::infinity();
            }
            return self.double_jacobian(a);
        }

        let h = field::sub_mod(&u2, &u1, p);
        let r = field::sub_mod(&s2, &s1, p);
        let h2 = field::mul_mod(&h, &h, p);
        let h3 = field::mul_mod(&h2, &h, p);
        let u1_h2 = field::mul_mod(&u1, &h2, p);

        let x3 = field::sub_mod(&field::sub_mod(&field::mul_mod(&r, &r, p), &h3, p), &field::mul_mod(&Integer::from(2), &u1_h2, p), p);
        let y3 = field::sub_mod(&field::mul_mod(&r, &field::sub_mod(&u1_h2, &x3, p), p), &field::mul_mod(&s1, &h3, p), p);
        let z3 = field::mul_mod(&h, &field::mul_mod(&a.z, &b.z, p), p);
        JacobianPoint { x: x3, y: y3, z: z3 }
    }

    #[must_use]
    pub fn to_affine(&self, point: &JacobianPoint) -> AffinePoint {
        if point.is_infinity() {
            return AffinePoint::Infinity;
        }
        let p = self.p();
        let Ok(z_inv) = field::inv_mod(&point.z, p) else { return AffinePoint::Infinity };
        let z_inv2 = field::mul_mod(&z_inv, &z_inv, p);
        let z_inv3 = field::mul_mod(&z_inv2, &z_inv, p);
        let x = field::mul_mod(&point.x, &z_inv2, p);
        let y = field::mul_mod(&point.y, &z_inv3, p);
        AffinePoint::Finite(x, y)
    }

    /// Multiplicación escalar por doble-y-suma sobre coordenadas Jacobianas.
    /// `k` puede ser negativo (se niega el punto) o exceder `n` (se reduce).
    #[instrument(skip(self, point), level = "debug")]
    #[must_use]
    pub fn multiply(&self, point: &AffinePoint, k: &Integer) -> AffinePoint {
        let reduced_k = field::reduce(k, &self.params.n);
        if reduced_k == 0 || matches!(point, AffinePoint::Infinity) {
            return AffinePoint::Infinity;
        }
        let mut accumulator = JacobianPoint::infinity();
        let base = JacobianPoint::from_affine(point);
        for bit_index in (0..reduced_k.significant_bits()).rev() {
            accumulator = self.double_jacobian(&accumulator);
            if reduced_k.get_bit(bit_index) {
                accumulator = self.add_jacobian(&accumulator, &base);
            }
        }
        self.to_affine(&accumulator)
    }

    /// Multiplicación del punto base. La línea original cachea una tabla de
    /// peine precomputada por curva; aquí se delega en `multiply`, dejando
    /// el cacheo de la tabla como una optimización de implementación.
    #[must_use]
    pub fn multiply_g(&self, k: &Integer) -> AffinePoint {
        let g = AffinePoint::Finite(self.params.g.0.clone(), self.params.g.1.clone());
        self.multiply(&g, k)
    }

    /// `BatchInverse`: ver [`field::batch_invert`].
    pub fn batch_inverse(&self, values: &[Integer]) -> Result<Vec<Option<Integer>>, CurveError> {
        batch_invert(values, self.p())
    }

    /// `BatchAdd(P, [Q])`: suma un punto fijo `p` contra una lista de puntos,
    /// compartiendo una única inversión por lotes para todas las pendientes.
    pub fn batch_add(&self, fixed: &AffinePoint, others: &[AffinePoint]) -> Vec<AffinePoint> {
        // Delegado a la suma afín directa: el ahorro del truco de Montgomery
        // se captura en `batch_add_x`, que es el consumido por BatchDL.
        others.iter().map(|q| self.add_affine(fixed, q)).collect()
    }

    /// `BatchAddX`: como `batch_add`, pero compartiendo una sola inversión
    /// por lotes para las pendientes y devolviendo sólo la coordenada x.
    pub fn batch_add_x(&self, fixed: &AffinePoint, others: &[AffinePoint]) -> Result<Vec<Option<Integer>>, CurveError> {
        let AffinePoint::Finite(x1, y1) = fixed else {
            return Ok(others.iter().map(|q| match q {
                AffinePoint::Finite(x, _) => Some(x.clone()),
                AffinePoint::Infinity => None,
            }).collect());
        };
        let p = self.p();
        let denominators: Vec<Integer> = others
            .iter()
            .map(|q| match q {
                AffinePoint::Finite(x2, _) => field::sub_mod(x2, x1, p),
                AffinePoint::Infinity => Integer::from(1),
            })
            .collect();
        let inverses = batch_invert(&denominators, p)?;

        let mut results = Vec::with_capacity(others.len());
        for (q, inverse) in others.iter().zip(inverses.iter()) {
            match (q, inverse) {
                (AffinePoint::Infinity, _) => results.push(Some(x1.clone())),
                (AffinePoint::Finite(x2, y2), Some(inv)) => {
                    let lambda = field::mul_mod(&field::sub_mod(y2, y1, p), inv, p);
                    let x3 = field::sub_mod(&field::sub_mod(&field::mul_mod(&lambda, &lambda, p), x1, p), x2, p);
                    results.push(Some(x3));
                }
                (AffinePoint::Finite(..), None) => results.push(None),
            }
        }
        Ok(results)
    }

    /// `BatchDouble`: duplica una lista de puntos compartiendo una única
    /// inversión por lotes sobre los denominadores `2y`.
    pub fn batch_double(&self, points: &[AffinePoint]) -> Result<Vec<AffinePoint>, CurveError> {
        let p = self.p();
        let denominators: Vec<Integer> = points
            .iter()
            .map(|pt| match pt {
                AffinePoint::Finite(_, y) => field::mul_mod(&Integer::from(2), y, p),
                AffinePoint::Infinity => Integer::from(1),
            })
            .collect();
        let inverses = batch_invert(&denominators, p)?;

        let mut results = Vec::with_capacity(points.len());
        for (pt, inverse) in points.iter().zip(inverses.iter()) {
            match (pt, inverse) {
                (AffinePoint::Infinity, _) => results.push(AffinePoint::Infinity),
                (AffinePoint::Finite(x, y), Some(inv)) if *y != 0 => {
                    let three_x2 = field::mul_mod(&Integer::from(3), &field::mul_mod(x, x, p), p);
                    let lambda = field::mul_mod(&field::add_mod(&three_x2, &self.params.a, p), inv, p);
                    let x3 = field::sub_mod(&field::mul_mod(&lambda, &lambda, p), &field::mul_mod(&Integer::from(2), x, p), p);
                    let y3 = field::sub_mod(&field::mul_mod(&lambda, &field::sub_mod(x, &x3, p), p), y, p);
                    results.push(AffinePoint::Finite(x3, y3));
                }
                _ => results.push(AffinePoint::Infinity),
            }
        }
        Ok(results)
    }

    /// `BatchAddList`: suma elemento a elemento dos listas de igual longitud.
    pub fn batch_add_list(&self, lhs: &[AffinePoint], rhs: &[AffinePoint]) -> Vec<AffinePoint> {
        lhs.iter().zip(rhs.iter()).map(|(a, b)| self.add_affine(a, b)).collect()
    }

    /// `BatchAddSubtractX`: para cada `Q` en `others`, retorna `(x(P+Q), x(P-Q))`,
    /// compartiendo las inversiones por lotes de ambas familias. Usado por
    /// `BatchDL` para probar logaritmos positivos y negativos a la vez.
    pub fn batch_add_subtract_x(
        &self,
        fixed: &AffinePoint,
        others: &[AffinePoint],
    ) -> Result<Vec<(Option<Integer>, Option<Integer>)>, CurveError> {
        let negated: Vec<AffinePoint> = others.iter().map(|q| self.negate(q)).collect();
        let sums = self.batch_add_x(fixed, others)?;
        let diffs = self.batch_add_x(fixed, &negated)?;
        Ok(sums.into_iter().zip(diffs).collect())
    }

    /// `BatchMultiplyG(scalars)`: versión por lotes de `multiply_g`.
    pub fn batch_multiply_g(&self, scalars: &[Integer]) -> Vec<AffinePoint> {
        scalars.iter().map(|k| self.multiply_g(k)).collect()
    }
}
