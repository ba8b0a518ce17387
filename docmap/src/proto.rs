//! # Wire Messages
//!
//! Protobuf messages exchanged with the transport layer, generated from the protos under
//! `proto/` by the `generate-proto` binary (`gen-proto` feature).
pub mod google {
    pub mod firestore {
        pub mod v1 {
            include!("proto/generated/google.firestore.v1.rs");
        }
    }

    pub mod r#type {
        include!("proto/generated/google.type.rs");
    }
}
