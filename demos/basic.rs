//! Walkthrough of the radix tree operations
use radix_mutable::{Error, RadixNode, RadixTree};

fn describe(node: &RadixNode<u32>, depth: usize) {
    for child in node.children() {
        println!(
            "{}{:?} terminal={} value={:?}",
            "  ".repeat(depth),
            child.label_lossy(),
            child.is_terminal(),
            child.value()
        );
        describe(child, depth + 1);
    }
}

fn main() -> Result<(), Error> {
    let mut tree = RadixTree::new();

    // Insert some values
    for (i, key) in ["ciao", "ciaone", "ciauz", "help", "helper", "cia", "test"]
        .iter()
        .enumerate()
    {
        tree.insert(key, i as u32)?;
    }

    // Check values
    assert_eq!(tree.search("ciauz")?.value(), Some(&2));
    assert_eq!(tree.search("uz").unwrap_err(), Error::KeyNotFound);
    assert_eq!(tree.insert("", 0).unwrap_err(), Error::InvalidKey);

    describe(tree.root(), 0);

    // Deleting a key with descendants leaves a branch point behind
    tree.delete("cia")?;
    tree.delete("ciauz")?;
    println!("after delete: {:?}", tree.stats());

    tree.compact();
    println!("after compact: {:?}", tree.stats());
    describe(tree.root(), 0);

    Ok(())
}
