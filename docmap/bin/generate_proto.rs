use std::env;
use std::fs;
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Generating document wire types...");

    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let out_dir = manifest_dir.join("src/proto/generated");
    let proto_folder = manifest_dir.join("proto");

    let proto_files = [
        proto_folder.join("google/type/latlng.proto"),
        proto_folder.join("google/firestore/v1/document.proto"),
        proto_folder.join("google/firestore/v1/write.proto"),
    ];

    if !out_dir.exists() {
        fs::create_dir_all(&out_dir)?;
    }

    tonic_prost_build::configure()
        .build_server(false)
        .build_client(false)
        .out_dir(&out_dir)
        .compile_protos(&proto_files, &[proto_folder])?;

    println!("Done! Generated files are in src/proto/generated");

    Ok(())
}
