// [libs/core/curve/src/registry.rs]
/*!
 * =================================================================
 * APARATO: CURVE REGISTRY (V1.0)
 * CLASIFICACIÓN: CORE EC KERNEL (ESTRATO L2)
 * RESPONSABILIDAD: SINGLETON PEREZOSO DE CURVAS NOMBRADAS
 *
 * El registro se inicializa una sola vez (vía `once_cell::sync::Lazy`,
 * siguiendo el patrón `GLOBAL_CONTEXT` de la línea original) y es
 * inmutable tras la inicialización, per el modelo de concurrencia §5: los
 * lectores nunca bloquean después del primer acceso.
 *
 * NOTA: las constantes hex de NIST SP 800-186 y RFC 5639 se transcriben
 * aquí manualmente; ver DESIGN.md para la nota de verificación.
 * =================================================================
 */

use crate::curve::Curve;
use crate::errors::CurveError;
use once_cell::sync::Lazy;
use paranoid_models::prelude::CurveParams;
use rug::Integer;
use std::collections::HashMap;

fn hex(value: &str) -> Integer {
    Integer::from_str_radix(value, 16).expect("curve constant must be valid hex")
}

fn curve_params(
    curve_id: &str,
    p: &str,
    a: &str,
    b: &str,
    gx: &str,
    gy: &str,
    n: &str,
    h: u32,
) -> CurveParams {
    CurveParams {
        curve_id: curve_id.to_string(),
        a: hex(a),
        b: hex(b),
        p: hex(p),
        g: (hex(gx), hex(gy)),
        n: hex(n),
        h: Integer::from(h),
    }
}

fn build_registry() -> HashMap<String, Curve> {
    let mut registry = HashMap::new();

    let secp192r1 = curve_params(
        "secp192r1",
        "fffffffffffffffffffffffffffffeffffffffffffffff",
        "fffffffffffffffffffffffffffffefffffffffffffffc",
        "64210519e59c80e70fa7e9ab72243049feb8deecc146b9b1",
        "188da80eb03090f67cbf20eb43a18800f4ff0afd82ff1012",
        "07192b95ffc8da78631011ed6b24cdd573f977a11e794811",
        "ffffffffffffffffffffffff99def836146bc9b1b4d22831",
        1,
    );
    registry.insert(secp192r1.curve_id.clone(), Curve::new(secp192r1));

    let secp224r1 = curve_params(
        "secp224r1",
        "ffffffffffffffffffffffffffffffff000000000000000000000001",
        "fffffffffffffffffffffffffffffffefffffffffffffffffffffe",
        "b4050a850c04b3abf54132565044b0b7d7bfd8ba270b39432355ffb4",
        "b70e0cbd6bb4bf7f321390b94a03c1d356c21122343280d6115c1d21",
        "bd376388b5f723fb4c22dfe6cd4375a05a07476444d5819985007e34",
        "ffffffffffffffffffffffffffff16a2e0b8f03e13dd29455c5c2a3d",
        1,
    );
    registry.insert(secp224r1.curve_id.clone(), Curve::new(secp224r1));

    let secp256r1 = curve_params(
        "secp256r1",
        "ffffffff00000001000000000000000000000000ffffffffffffffffffffff",
        "ffffffff00000001000000000000000000000000fffffffffffffffffffffc",
        "5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b",
        "6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296",
        "4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5",
        "ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551",
        1,
    );
    registry.insert(secp256r1.curve_id.clone(), Curve::new(secp256r1));

    let secp384r1 = curve_params(
        "secp384r1",
        "fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffeffffffff0000000000000000ffffffff",
        "fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffeffffffff0000000000000000fffffffc",
        "b3312fa7e23ee7e4988e056be3f82d19181d9c6efe8141120314088f5013875ac656398d8a2ed19d2a85c8edd3ec2aef",
        "aa87ca22be8b05378eb1c71ef320ad746e1d3b628ba79b9859f741e082542a385502f25dbf55296c3a545e3872760ab7",
        "3617de4a96262c6f5d9e98bf9292dc29f8f41dbd289a147ce9da3113b5f0b8c00a60b1ce1d7e819d7a431d7c90ea0e5f",
        "ffffffffffffffffffffffffffffffffffffffffffffffc7634d81f4372ddf581a0db248b0a77aecec196accc52973",
        1,
    );
    registry.insert(secp384r1.curve_id.clone(), Curve::new(secp384r1));

    let secp521r1 = curve_params(
        "secp521r1",
        "1ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
        "1fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffc",
        "051953eb9618e1c9a1f929a21a0b68540eea2da725b99b315f3b8b489918ef109e156193951ec7e937b1652c0bd3bb1bf073573df883d2c34f1ef451fd46b503f00",
        "0c6858e06b70404e9cd9e3ecb662395b4429c648139053fb521f828af606b4d3dbaa14b5e77efe75928fe1dc127a2ffa8de3348b3c1856a429bf97e7e31c2e5bd66",
        "11839296a789a3bc0045c8a5fb42c7d1bd998f54449579b4468017afbd17273e662c97ee72995ef42640c550b9013fad0761353c7086a272c24088be94769fd16650",
        "1fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffa51868783bf2f966b7fcc0148f709a5d03bb5c9b8899c47aebb6fb71e91386409",
        1,
    );
    registry.insert(secp521r1.curve_id.clone(), Curve::new(secp521r1));

    let secp256k1 = curve_params(
        "secp256k1",
        "fffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f",
        "0",
        "7",
        "79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798",
        "483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8",
        "fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141",
        1,
    );
    registry.insert(secp256k1.curve_id.clone(), Curve::new(secp256k1));

    let brainpool_p256r1 = curve_params(
        "brainpoolP256r1",
        "a9fb57dba1eea9bc3e660a909d838d726e3bf623d52620282013481d1f6e5377",
        "7d5a0975fc2c3057eef67530417affe7fb8055c126dc5c6ce94a4b44f330b5d9",
        "26dc5c6ce94a4b44f330b5d9bbd77cbf958416295cf7e1ce6bccdc18ff8c07b6",
        "8bd2aeb9cb7e57cb2c4b482ffc81b7afb9de27e1e3bd23c23a4453bd9ace3262",
        "547ef835c3dac4fd97f8461a14611dc9c27745132ded8e545c1d54c72f046997",
        "a9fb57dba1eea9bc3e660a909d838d718c397aa3b561a6f7901e0e82974856a7",
        1,
    );
    registry.insert(brainpool_p256r1.curve_id.clone(), Curve::new(brainpool_p256r1));

    let brainpool_p384r1 = curve_params(
        "brainpoolP384r1",
        "8cb91e82a3386d280f5d6f7e50e641df152f7109ed5456b412b1da197fb71123acd3a729901d1a71874700133107ec53",
        "7bc382c63d8c150c3c72080ace05afa0c2bea28e4fb22787139165efba91f90f8aa5814a503ad4eb04a8c7dd22ce2826",
        "04a8c7dd22ce28268b39b55416f0447c2fb77de107dcd2a62e880ea53eeb62d57cb4390295dbc9943ab78696fa504c11",
        "1d1c64f068cf45ffa2a63a81b7c13f6b8847a3e77ef14fe3db7fcafe0cbd10e8e826e03436d646aaef87b2e247d4af1e",
        "8abe1d7520f9c2a45cb1eb8e95cfd55262b70b29feec5864e19c054ff99129280e4646217791811142820b5c9b302e",
        "8cb91e82a3386d280f5d6f7e50e641df152f7109ed5456b31f166e6cac0425a7cf3ab6af6b7fc3103b883202e9046565",
        1,
    );
    registry.insert(brainpool_p384r1.curve_id.clone(), Curve::new(brainpool_p384r1));

    let brainpool_p512r1 = curve_params(
        "brainpoolP512r1",
        "aadd9db8dbe9c48b3fd4e6ae33c9fc07cb308db3b3c9d20ed6639cca703308717d4d9b009bc66842aecda12ae6a380e62881ff2f2d82c68528aa6056583a48f3",
        "7830a3318b603b89e2327145ac234cc594cbdd8d3df91610a83441caea9863bc2ded5d5aa8253aa10a2ef1c98b9ac8b57f1117a72bf2c7b9e7c1ac4d77fc94ca",
        "3df91610a83441caea9863bc2ded5d5aa8253aa10a2ef1c98b9ac8b57f1117a72bf2c7b9e7c1ac4d77fc94cadc083e67984050b75ebae5dd2809bd638016f723",
        "81aee4bdd82ed9645a21322e9c4c6a9385ed9f70b5d916c1b43b62eef4d0098eff3b1f78e2d0d48d50d1687b93b97d5f7c6d5047406a5e688b352209bcb9f822",
        "7dde385d566332ecc0eabfa9cf7822fdf209f70024a57b1aa000c55b881f8111b2dcde494a5f485e5bca4bd88a2763aed1ca2b2fa8f0540678cd1e0f3ad80892",
        "aadd9db8dbe9c48b3fd4e6ae33c9fc07cb308db3b3c9d20ed6639cca70330870553e5c414ca92619418661197fac10471db1d381085ddaddb58796829ca90069",
        1,
    );
    registry.insert(brainpool_p512r1.curve_id.clone(), Curve::new(brainpool_p512r1));

    registry
}

/// Registro global, perezoso e inmutable de curvas nombradas.
pub static GLOBAL_CURVE_REGISTRY: Lazy<HashMap<String, Curve>> = Lazy::new(build_registry);

/// Conjunto de curvas aprobadas usado por `CheckWeakCurve` (§4.G): cualquier
/// `curve_id` fuera de este conjunto se considera débil por definición.
pub fn approved_curve_ids() -> impl Iterator<Item = &'static str> {
    [
        "secp192r1",
        "secp224r1",
        "secp256r1",
        "secp384r1",
        "secp521r1",
        "secp256k1",
        "brainpoolP256r1",
        "brainpoolP384r1",
        "brainpoolP512r1",
    ]
    .into_iter()
}

/// Busca una curva registrada por su identificador.
pub fn lookup(curve_id: &str) -> Result<&'static Curve, CurveError> {
    GLOBAL_CURVE_REGISTRY
        .get(curve_id)
        .ok_or_else(|| CurveError::UnknownCurve(curve_id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_registered_curve_has_a_base_point_on_the_curve() {
        for curve in GLOBAL_CURVE_REGISTRY.values() {
            let g = paranoid_models::prelude::AffinePoint::Finite(
                curve.params.g.0.clone(),
                curve.params.g.1.clone(),
            );
            assert!(curve.on_curve(&g), "base point of {} must satisfy the curve equation", curve.params.curve_id);
        }
    }

    #[test]
    fn lookup_of_unknown_curve_fails() {
        assert!(lookup("not-a-real-curve").is_err());
    }
}
