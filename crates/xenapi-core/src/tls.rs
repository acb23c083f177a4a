//! TLS trust policies for the HTTPS transport.

use std::path::Path;
use std::sync::{Arc, Mutex};

use reqwest::ClientBuilder;
use rustls::client::danger::{HandshakeSignatureValid, ServerCertVerified, ServerCertVerifier};
use rustls::crypto::{verify_tls12_signature, verify_tls13_signature, CryptoProvider};
use rustls::pki_types::{CertificateDer, ServerName, UnixTime};
use rustls::{DigitallySignedStruct, SignatureScheme};
use tracing::{debug, info, warn};

use crate::config::TlsPolicy;
use crate::{Error, Result};

/// Certificate verifier that pins the first server certificate it sees.
///
/// Later handshakes must present the same leaf certificate, byte for byte.
/// Clones share the pin.
#[derive(Debug, Clone)]
pub struct TrustOnFirstUse {
    pinned: Arc<Mutex<Option<Vec<u8>>>>,
    provider: Arc<CryptoProvider>,
}

impl TrustOnFirstUse {
    /// Create a verifier with nothing pinned yet.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pinned: Arc::new(Mutex::new(None)),
            provider: Arc::new(rustls::crypto::ring::default_provider()),
        }
    }

    /// Create a verifier that already trusts `certificate` (DER).
    #[must_use]
    pub fn with_pinned(certificate: Vec<u8>) -> Self {
        let verifier = Self::new();
        if let Ok(mut pinned) = verifier.pinned.lock() {
            *pinned = Some(certificate);
        }
        verifier
    }

    /// The pinned certificate (DER), once a handshake has happened.
    #[must_use]
    pub fn pinned(&self) -> Option<Vec<u8>> {
        self.pinned.lock().ok().and_then(|pinned| pinned.clone())
    }

    fn client_config(&self) -> Result<rustls::ClientConfig> {
        let config = rustls::ClientConfig::builder_with_provider(Arc::clone(&self.provider))
            .with_safe_default_protocol_versions()
            .map_err(|err| Error::ConfigError(format!("Unsupported TLS configuration: {err}")))?
            .dangerous()
            .with_custom_certificate_verifier(Arc::new(self.clone()))
            .with_no_client_auth();
        Ok(config)
    }
}

impl Default for TrustOnFirstUse {
    fn default() -> Self {
        Self::new()
    }
}

impl ServerCertVerifier for TrustOnFirstUse {
    fn verify_server_cert(
        &self,
        end_entity: &CertificateDer<'_>,
        _intermediates: &[CertificateDer<'_>],
        server_name: &ServerName<'_>,
        _ocsp_response: &[u8],
        _now: UnixTime,
    ) -> std::result::Result<ServerCertVerified, rustls::Error> {
        let mut pinned = self
            .pinned
            .lock()
            .map_err(|_| rustls::Error::General("certificate pin lock poisoned".to_string()))?;

        if let Some(expected) = pinned.as_deref() {
            return if expected == end_entity.as_ref() {
                Ok(ServerCertVerified::assertion())
            } else {
                Err(rustls::Error::General(format!(
                    "certificate presented by {server_name:?} differs from the one trusted on first use"
                )))
            };
        }

        info!(server = ?server_name, "Pinning server certificate on first use");
        *pinned = Some(end_entity.as_ref().to_vec());
        Ok(ServerCertVerified::assertion())
    }

    fn verify_tls12_signature(
        &self,
        message: &[u8],
        cert: &CertificateDer<'_>,
        dss: &DigitallySignedStruct,
    ) -> std::result::Result<HandshakeSignatureValid, rustls::Error> {
        verify_tls12_signature(
            message,
            cert,
            dss,
            &self.provider.signature_verification_algorithms,
        )
    }

    fn verify_tls13_signature(
        &self,
        message: &[u8],
        cert: &CertificateDer<'_>,
        dss: &DigitallySignedStruct,
    ) -> std::result::Result<HandshakeSignatureValid, rustls::Error> {
        verify_tls13_signature(
            message,
            cert,
            dss,
            &self.provider.signature_verification_algorithms,
        )
    }

    fn supported_verify_schemes(&self) -> Vec<SignatureScheme> {
        self.provider
            .signature_verification_algorithms
            .supported_schemes()
    }
}

/// Apply `policy` to an HTTP client builder.
///
/// Returns the verifier when the policy is trust-on-first-use so the caller can
/// inspect the pin later.
///
/// # Errors
///
/// Returns [`Error::ConfigError`] if the CA file cannot be read or parsed.
pub fn configure(
    builder: ClientBuilder,
    policy: TlsPolicy,
    ca_cert: Option<&Path>,
) -> Result<(ClientBuilder, Option<TrustOnFirstUse>)> {
    match policy {
        TlsPolicy::Strict => {
            let mut builder = builder;
            if let Some(ca_cert) = ca_cert {
                debug!("loading CA certificate from {}", ca_cert.display());
                let bytes = std::fs::read(ca_cert).map_err(|err| {
                    Error::ConfigError(format!(
                        "Failed to read CA certificate {}: {err}",
                        ca_cert.display()
                    ))
                })?;
                let cert = reqwest::Certificate::from_pem(&bytes)
                    .map_err(|err| Error::ConfigError(format!("Invalid CA certificate: {err}")))?;
                builder = builder.add_root_certificate(cert);
            }
            Ok((builder, None))
        }
        TlsPolicy::Insecure => {
            warn!("TLS certificate verification disabled");
            Ok((builder.danger_accept_invalid_certs(true), None))
        }
        TlsPolicy::TrustOnFirstUse => {
            let verifier = TrustOnFirstUse::new();
            let tls = verifier.client_config()?;
            Ok((builder.use_preconfigured_tls(tls), Some(verifier)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verify(verifier: &TrustOnFirstUse, der: &[u8]) -> bool {
        let cert = CertificateDer::from(der.to_vec());
        let name = ServerName::try_from("pool.example.com").unwrap();
        verifier
            .verify_server_cert(&cert, &[], &name, &[], UnixTime::now())
            .is_ok()
    }

    #[test]
    fn test_first_certificate_is_pinned() {
        let verifier = TrustOnFirstUse::new();
        assert!(verifier.pinned().is_none());

        assert!(verify(&verifier, b"first"));
        assert_eq!(verifier.pinned(), Some(b"first".to_vec()));
        assert!(verify(&verifier, b"first"));
    }

    #[test]
    fn test_changed_certificate_is_rejected() {
        let verifier = TrustOnFirstUse::new();
        assert!(verify(&verifier, b"first"));
        assert!(!verify(&verifier, b"second"));
        assert_eq!(verifier.pinned(), Some(b"first".to_vec()));
    }

    #[test]
    fn test_clones_share_the_pin() {
        let verifier = TrustOnFirstUse::new();
        let clone = verifier.clone();
        assert!(verify(&clone, b"first"));
        assert_eq!(verifier.pinned(), Some(b"first".to_vec()));
    }

    #[test]
    fn test_with_pinned() {
        let verifier = TrustOnFirstUse::with_pinned(b"known".to_vec());
        assert!(!verify(&verifier, b"other"));
        assert!(verify(&verifier, b"known"));
    }

    #[test]
    fn test_supported_schemes_not_empty() {
        assert!(!TrustOnFirstUse::new().supported_verify_schemes().is_empty());
    }

    #[test]
    fn test_configure_policies() {
        let (_, verifier) = configure(ClientBuilder::new(), TlsPolicy::Strict, None).unwrap();
        assert!(verifier.is_none());

        let (_, verifier) = configure(ClientBuilder::new(), TlsPolicy::Insecure, None).unwrap();
        assert!(verifier.is_none());

        let (_, verifier) =
            configure(ClientBuilder::new(), TlsPolicy::TrustOnFirstUse, None).unwrap();
        assert!(verifier.is_some());
    }

    #[test]
    fn test_configure_missing_ca_file() {
        let result = configure(
            ClientBuilder::new(),
            TlsPolicy::Strict,
            Some(Path::new("/nonexistent/ca.pem")),
        );
        assert!(matches!(result, Err(Error::ConfigError(_))));
    }
}
