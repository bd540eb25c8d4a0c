//! Shared helpers for integration tests.

pub mod release_server;

use flate2::write::GzEncoder;
use flate2::Compression;
use tar::Builder;

/// Builds a gzip-compressed tarball in memory from `(name, contents, mode)`
/// entries, shaped like a flat release tarball.
pub fn tar_gz(entries: &[(&str, &[u8], u32)]) -> Vec<u8> {
    let mut builder = Builder::new(GzEncoder::new(Vec::new(), Compression::default()));
    for (name, data, mode) in entries {
        let mut header = tar::Header::new_gnu();
        header.set_size(data.len() as u64);
        header.set_mode(*mode);
        header.set_cksum();
        builder.append_data(&mut header, name, *data).unwrap();
    }
    builder.into_inner().unwrap().finish().unwrap()
}
