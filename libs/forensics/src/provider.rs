// [libs/forensics/src/provider.rs]
/*!
 * =================================================================
 * APARATO: STATIC DATA PROVIDER (V1.0)
 * CLASIFICACIÓN: STATIC DATA SERVICES (ESTRATO L1)
 * RESPONSABILIDAD: CONTRATO §6 DE SERVICIOS DE DATOS DE SÓLO LECTURA
 *
 * Los tres servicios (denylist de RNGs no sembradas, tabla de
 * reconstrucción Keypair, denylist OpenSSL) se exponen detrás de un
 * trait para permitir que los chequeos de §4.C se prueben sin depender
 * de las tablas reales (que en una implementación de producción se
 * cargan desde un almacén externo, fuera del alcance de este crate).
 * =================================================================
 */

use rug::Integer;
use std::collections::{HashMap, HashSet};

/// Fuente de datos estáticos, cargada una sola vez y de sólo lectura
/// después (§5 Shared-resource policy).
pub trait StaticDataProvider: Send + Sync {
    /// Primos candidatos conocidos producidos por PRNGs nunca sembrados,
    /// indexados por el tamaño en bits del factor buscado.
    fn get_unseeded_rands(&self, bit_size: u32) -> HashSet<Integer>;

    /// top-64-bits-de-n → registro de reconstrucción de semilla, de la
    /// forma `b0|i1|b1|i2|b2…` (ver [`crate::keypair::reconstruct_seed`]).
    fn get_keypair_data(&self) -> &HashMap<u64, Vec<u8>>;

    /// Conjunto `"RSA-<size>:<40-hex>"` de módulos conocidos como débiles
    /// (CVE-2008-0166, Debian OpenSSL predictable PRNG).
    fn get_openssl_denylist(&self) -> &HashSet<String>;
}

/// Implementación en memoria del proveedor de datos estáticos, usada por
/// las pruebas de integridad y como plantilla para una carga real desde
/// almacenamiento (archivo, blob store, etc.) en una implementación de
/// producción.
#[derive(Debug, Default, Clone)]
pub struct InMemoryStaticDataProvider {
    unseeded_rands: HashMap<u32, HashSet<Integer>>,
    keypair_table: HashMap<u64, Vec<u8>>,
    openssl_denylist: HashSet<String>,
}

impl InMemoryStaticDataProvider {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_unseeded_rand(mut self, bit_size: u32, candidate: Integer) -> Self {
        self.unseeded_rands.entry(bit_size).or_default().insert(candidate);
        self
    }

    #[must_use]
    pub fn with_keypair_record(mut self, n_msb: u64, record: Vec<u8>) -> Self {
        self.keypair_table.insert(n_msb, record);
        self
    }

    #[must_use]
    pub fn with_denylist_entry(mut self, entry: String) -> Self {
        self.openssl_denylist.insert(entry);
        self
    }
}

impl StaticDataProvider for InMemoryStaticDataProvider {
    fn get_unseeded_rands(&self, bit_size: u32) -> HashSet<Integer> {
        self.unseeded_rands.get(&bit_size).cloned().unwrap_or_default()
    }

    fn get_keypair_data(&self) -> &HashMap<u64, Vec<u8>> {
        &self.keypair_table
    }

    fn get_openssl_denylist(&self) -> &HashSet<String> {
        &self.openssl_denylist
    }
}
