use super::Identity;

pub const SSH_ED25519: &str = "ssh-ed25519";
pub const SSH_ED25519_CERT: &str = "ssh-ed25519-cert-v01@openssh.com";
pub const SSH_RSA: &str = "ssh-rsa";
pub const SSH_RSA_CERT: &str = "ssh-rsa-cert-v01@openssh.com";
pub const RSA_SHA2_256: &str = "rsa-sha2-256";
pub const RSA_SHA2_256_CERT: &str = "rsa-sha2-256-cert-v01@openssh.com";
pub const RSA_SHA2_512: &str = "rsa-sha2-512";
pub const RSA_SHA2_512_CERT: &str = "rsa-sha2-512-cert-v01@openssh.com";
pub const ECDSA_SHA2_NISTP256: &str = "ecdsa-sha2-nistp256";
pub const ECDSA_SHA2_NISTP384: &str = "ecdsa-sha2-nistp384";
pub const ECDSA_SHA2_NISTP521: &str = "ecdsa-sha2-nistp521";

/// Public key algorithms offered during user authentication in order of preference.
pub const PUBLICKEY_ALGORITHMS: [&'static str; 10] = [
    SSH_ED25519_CERT,
    SSH_ED25519,
    RSA_SHA2_512_CERT,
    RSA_SHA2_256_CERT,
    RSA_SHA2_512,
    RSA_SHA2_256,
    ECDSA_SHA2_NISTP256,
    ECDSA_SHA2_NISTP384,
    ECDSA_SHA2_NISTP521,
    SSH_RSA,
];

/// RFC 8332: An RSA key may be used with SHA-2 signatures under different algorithm names.
const RSA_ALGORITHMS: [&'static str; 3] = [RSA_SHA2_512, RSA_SHA2_256, SSH_RSA];
const RSA_CERT_ALGORITHMS: [&'static str; 3] = [RSA_SHA2_512_CERT, RSA_SHA2_256_CERT, SSH_RSA_CERT];

/// Whether `algorithm` may be announced for a key of type `key_type`.
pub fn is_compatible_algorithm(key_type: &str, algorithm: &str) -> bool {
    match key_type {
        SSH_RSA => RSA_ALGORITHMS.contains(&algorithm),
        SSH_RSA_CERT => RSA_CERT_ALGORITHMS.contains(&algorithm),
        _ => key_type == algorithm,
    }
}

/// The signature algorithms to try for an identity, in order.
///
/// These are the `preferred` algorithms that are compatible with the identity's key type
/// (each at most once). If there is none, the key type itself is the only candidate.
pub fn candidate_algorithms<'a>(preferred: &[&'a str], identity: &'a Identity) -> Vec<&'a str> {
    let key_type = identity.algorithm();
    let mut candidates: Vec<&'a str> = Vec::with_capacity(preferred.len());
    for algorithm in preferred {
        if is_compatible_algorithm(key_type, algorithm) && !candidates.contains(algorithm) {
            candidates.push(*algorithm)
        }
    }
    if candidates.is_empty() {
        candidates.push(key_type)
    }
    candidates
}
