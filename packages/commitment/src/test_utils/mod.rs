//! Test utilities: an in-memory, hash-committed key-value store that hands out proofs.

#[cfg(any(test, feature = "test-utils"))]
pub use mock::*;

#[allow(missing_docs, clippy::missing_panics_doc, clippy::must_use_candidate)]
#[cfg(any(test, feature = "test-utils"))]
mod mock {
    use std::collections::BTreeMap;

    use ibc_client_utils::ensure;
    use sha2::{Digest, Sha256};

    use crate::{
        commitment::{CommitmentPath, CommitmentRoot},
        error::ProofError,
        proof::CommitmentProof,
    };

    /// A flat key-value store whose root is the SHA-256 of its sorted entries
    #[derive(Clone, Debug, Default)]
    pub struct MockStore {
        entries: BTreeMap<Vec<u8>, Vec<u8>>,
    }

    impl MockStore {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn insert(&mut self, path: &CommitmentPath, value: impl Into<Vec<u8>>) -> &mut Self {
            self.entries.insert(path.to_bytes(), value.into());
            self
        }

        pub fn root(&self) -> CommitmentRoot {
            compute_root(&self.entries)
        }

        /// A proof over the current contents of the store
        pub fn proof(&self) -> MockProof {
            MockProof {
                entries: Some(self.entries.clone()),
            }
        }
    }

    /// Snapshot of a [`MockStore`]; verification recomputes the root from it
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct MockProof {
        entries: Option<BTreeMap<Vec<u8>, Vec<u8>>>,
    }

    impl MockProof {
        /// A proof that carries nothing
        pub const fn empty() -> Self {
            Self { entries: None }
        }

        fn checked_entries(
            &self,
            root: &CommitmentRoot,
        ) -> Result<&BTreeMap<Vec<u8>, Vec<u8>>, ProofError> {
            let entries = self.entries.as_ref().ok_or(ProofError::EmptyProof)?;

            let computed = compute_root(entries);
            ensure!(
                computed == *root,
                ProofError::RootMismatch {
                    expected: root.as_bytes().to_vec(),
                    found: computed.into_vec(),
                }
            );

            Ok(entries)
        }
    }

    impl CommitmentProof for MockProof {
        fn is_empty(&self) -> bool {
            self.entries.is_none()
        }

        fn verify_membership(
            &self,
            root: &CommitmentRoot,
            path: &CommitmentPath,
            value: &[u8],
        ) -> Result<(), ProofError> {
            match self.checked_entries(root)?.get(&path.to_bytes()) {
                Some(stored) if stored.as_slice() == value => Ok(()),
                Some(_) => Err(ProofError::MembershipVerificationFailed {
                    reason: format!("value stored at {path} does not match"),
                }),
                None => Err(ProofError::MembershipVerificationFailed {
                    reason: format!("no value stored at {path}"),
                }),
            }
        }

        fn verify_non_membership(
            &self,
            root: &CommitmentRoot,
            path: &CommitmentPath,
        ) -> Result<(), ProofError> {
            if self.checked_entries(root)?.contains_key(&path.to_bytes()) {
                return Err(ProofError::NonMembershipVerificationFailed {
                    reason: format!("a value is stored at {path}"),
                });
            }

            Ok(())
        }
    }

    fn compute_root(entries: &BTreeMap<Vec<u8>, Vec<u8>>) -> CommitmentRoot {
        let mut hasher = Sha256::new();
        for (key, value) in entries {
            hasher.update((key.len() as u64).to_be_bytes());
            hasher.update(key);
            hasher.update((value.len() as u64).to_be_bytes());
            hasher.update(value);
        }
        CommitmentRoot::from_bytes(&hasher.finalize())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::{
        commitment::{apply_prefix, CommitmentPath, CommitmentPrefix, CommitmentRoot},
        error::ProofError,
        proof::CommitmentProof,
    };

    fn path(suffix: &str) -> CommitmentPath {
        apply_prefix(&CommitmentPrefix::from("ibc"), suffix).unwrap()
    }

    fn store() -> MockStore {
        let mut store = MockStore::new();
        store
            .insert(&path("commitments/ports/transfer/channels/channel-0/packets/1"), [0x11; 32])
            .insert(&path("connections/connection-0"), b"connection".to_vec());
        store
    }

    #[test]
    fn accepts_stored_value() {
        let store = store();
        let res = store.proof().verify_membership(
            &store.root(),
            &path("connections/connection-0"),
            b"connection",
        );
        assert!(res.is_ok());
    }

    #[rstest]
    #[case::wrong_value("connections/connection-0", b"other".to_vec(), None)]
    #[case::wrong_path("connections/connection-1", b"connection".to_vec(), None)]
    #[case::wrong_root("connections/connection-0", b"connection".to_vec(), Some([0x42; 32]))]
    fn rejects_membership(
        #[case] suffix: &str,
        #[case] value: Vec<u8>,
        #[case] root_override: Option<[u8; 32]>,
    ) {
        let store = store();
        let root = root_override.map_or_else(|| store.root(), |r| CommitmentRoot::from_bytes(&r));

        let res = store.proof().verify_membership(&root, &path(suffix), &value);
        assert!(res.is_err());
    }

    #[test]
    fn non_membership_of_absent_key() {
        let store = store();
        let absent = path("acks/ports/transfer/channels/channel-0/acknowledgements/1");
        let proof = store.proof();

        assert!(proof.verify_non_membership(&store.root(), &absent).is_ok());
        assert!(proof
            .verify_membership(&store.root(), &absent, &[0x01])
            .is_err());
    }

    #[test]
    fn fails_non_membership_of_present_key() {
        let store = store();
        let res = store
            .proof()
            .verify_non_membership(&store.root(), &path("connections/connection-0"));
        assert!(matches!(
            res,
            Err(ProofError::NonMembershipVerificationFailed { .. })
        ));
    }

    #[test]
    fn fails_on_root_mismatch() {
        let store = store();
        let res = store.proof().verify_non_membership(
            &CommitmentRoot::from_bytes(&[0u8; 32]),
            &path("connections/connection-9"),
        );
        assert!(matches!(res, Err(ProofError::RootMismatch { .. })));
    }

    #[test]
    fn empty_proof_proves_nothing() {
        let store = store();
        let proof = MockProof::empty();

        assert!(proof.is_empty());
        assert_eq!(
            proof.verify_non_membership(&store.root(), &path("connections/connection-9")),
            Err(ProofError::EmptyProof)
        );
    }
}
