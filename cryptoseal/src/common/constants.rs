/// Suffix appended to a file name when the file is sealed.
pub const SEALED_SUFFIX: &str = ".enc";

/// Modulus size used when generating the operator keypair.
pub const RSA_MODULUS_BITS: u32 = 2048;

/// Width of the RSA-OAEP output for a 2048-bit modulus. The envelope
/// layout hardcodes this, so sealing under any other key size is refused.
pub const SEALED_KEY_LEN: usize = 256;

/// Length of the per-file AES-256 key.
pub const FILE_KEY_LEN: usize = 32;

/// Length of the CBC initialization vector.
pub const IV_LEN: usize = 16;

/// Sealed key plus IV; anything shorter cannot be an envelope.
pub const MIN_ENVELOPE_LEN: usize = SEALED_KEY_LEN + IV_LEN;

/// Allow-set entry that makes every extension eligible.
pub const WILDCARD_EXTENSION: &str = ".*";

// --- Settings defaults ---

/// Default location of the public key file.
pub const DEFAULT_PUBLIC_KEY_PATH: &str = "public_key.pem";

/// Default location of the private key file.
pub const DEFAULT_PRIVATE_KEY_PATH: &str = "private_key.pem";

/// Default watch directory for a freshly bootstrapped settings file.
pub const DEFAULT_WATCH_DIRECTORY: &str = ".";
