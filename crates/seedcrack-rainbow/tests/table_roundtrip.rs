//! End-to-end table workflow: generate on disk, sort, look every planted
//! seed back up through the public file-level entry points.

use seedcrack_rainbow::app::generator::generate_table;
use seedcrack_rainbow::app::lookup::search_table_file;
use seedcrack_rainbow::domain::chain::walk_chain;
use seedcrack_rainbow::domain::registry::HashRegistry;
use seedcrack_rainbow::error::Error;
use seedcrack_rainbow::infra::table_store::TableView;
use tempfile::tempdir;

#[test]
fn generate_sort_and_recover_every_start_point() {
    let dir = tempdir().unwrap();
    let registry = HashRegistry::builtin();
    let entry = registry.resolve("wikihash").unwrap();

    let chain_num = 1000u32;
    let chain_len = 100u32;

    let path = generate_table(dir.path(), chain_num, chain_len, 0, entry).unwrap();
    assert_eq!(
        path.file_name().unwrap().to_str().unwrap(),
        "wikihash.1000.100.0.rt"
    );
    assert_eq!(std::fs::metadata(&path).unwrap().len(), 8000);

    let starts: Vec<u32> = {
        let view = TableView::open(&path, chain_num).unwrap();
        let chains = view.chains();
        assert!(chains.windows(2).all(|w| w[0].end <= w[1].end));
        chains.iter().map(|c| c.start).collect()
    };

    // Every start-point's own digest sits at position 0 of its chain, so
    // each one must be recoverable.
    let mut buf = [0u8; 64];
    for &start in &starts {
        let target = (entry.func)(start, &mut buf)[..entry.digest_len].to_vec();
        let found = search_table_file(&path, &registry, &target)
            .unwrap()
            .expect("start-point must be recoverable");
        assert_eq!(found, start);
    }
}

#[test]
fn search_validates_digest_width() {
    let dir = tempdir().unwrap();
    let registry = HashRegistry::builtin();
    let entry = registry.resolve("wikihash").unwrap();

    let path = generate_table(dir.path(), 16, 4, 0, entry).unwrap();
    let short = [0u8; 4];
    assert!(matches!(
        search_table_file(&path, &registry, &short),
        Err(Error::DigestLength {
            expected: 16,
            found: 4
        })
    ));
}

#[test]
fn search_rejects_unparseable_filename() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.rt");
    std::fs::write(&path, [0u8; 8]).unwrap();

    let registry = HashRegistry::builtin();
    let target = [0u8; 16];
    assert!(matches!(
        search_table_file(&path, &registry, &target),
        Err(Error::BadTableName(_))
    ));
}

#[test]
fn search_rejects_truncated_file() {
    let dir = tempdir().unwrap();
    let registry = HashRegistry::builtin();

    // Filename promises 10 chains, file holds one record.
    let path = dir.path().join("wikihash.10.5.0.rt");
    std::fs::write(&path, [0u8; 8]).unwrap();

    let target = [0u8; 16];
    assert!(matches!(
        search_table_file(&path, &registry, &target),
        Err(Error::TruncatedTable { .. })
    ));
}

#[test]
fn lookup_walks_interior_positions() {
    // A seed three steps into some chain is found through the same file
    // entry point, not just position-zero start-points.
    let dir = tempdir().unwrap();
    let registry = HashRegistry::builtin();
    let entry = registry.resolve("wikihash").unwrap();

    let chain_len = 20u32;
    let path = generate_table(dir.path(), 64, chain_len, 1, entry).unwrap();

    let start = {
        let view = TableView::open(&path, 64).unwrap();
        view.chains()[0].start
    };

    // Walk three steps in by hand to obtain an interior seed.
    let mut buf = [0u8; 64];
    let mut s = start;
    for round in 0..3 {
        let digest = (entry.func)(s, &mut buf);
        s = seedcrack_rainbow::reduce(&digest[..entry.digest_len], round);
    }
    let target = (entry.func)(s, &mut buf)[..entry.digest_len].to_vec();

    let found = search_table_file(&path, &registry, &target)
        .unwrap()
        .expect("interior seed must be recoverable");
    // Any returned seed must actually produce the target digest.
    let mut check = [0u8; 64];
    assert_eq!(&(entry.func)(found, &mut check)[..entry.digest_len], target.as_slice());

    // The generated chain endpoint must also still be reproducible.
    let view = TableView::open(&path, 64).unwrap();
    let chain = view.chains()[0];
    assert_eq!(
        walk_chain(chain.start, chain_len, entry.func, entry.digest_len),
        chain.end
    );
}
