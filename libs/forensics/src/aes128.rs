// [libs/forensics/src/aes128.rs]
/*!
 * =================================================================
 * APARATO: AES-128 ECB PRIMITIVE (V1.0)
 * CLASIFICACIÓN: STATIC DATA SERVICES (ESTRATO L1)
 * RESPONSABILIDAD: CIFRADO DE UN BLOQUE, SIN RELLENO (FIPS 197)
 *
 * Único consumidor: el regenerador Keypair (CVE-2021-41117), que reutiliza
 * el PRNG basado en AES-ECB del paquete npm vulnerado.
 * =================================================================
 */

use aes::cipher::{generic_array::GenericArray, BlockEncrypt, KeyInit};
use aes::Aes128;

#[must_use]
pub fn encrypt_block(key: &[u8; 16], block: &[u8; 16]) -> [u8; 16] {
    let cipher = Aes128::new(GenericArray::from_slice(key));
    let mut buffer = GenericArray::clone_from_slice(block);
    cipher.encrypt_block(&mut buffer);
    buffer.into()
}
