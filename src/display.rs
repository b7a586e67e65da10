//! Read-only diagnostic traversals. Neither affects the data model and the
//! line format is not contractually binding.

use std::io::{self, Write};

use crate::tree::CodeTree;

/// Renders the tree shape: one node per line, symbol key and frequency,
/// indented by depth with `[LEFT]`/`[RIGHT]` edge labels.
pub fn write_tree<W: Write>(tree: &CodeTree, out: &mut W) -> io::Result<()> {
    let mut stack = vec![(tree.root(), 0usize, "")];
    while let Some((id, depth, label)) = stack.pop() {
        let node = tree.node(id);
        for _ in 0..depth {
            write!(out, "--")?;
        }
        match node.symbol() {
            Some(symbol) => writeln!(out, "{label}[{}] : {}", symbol_label(symbol), node.frequency())?,
            None => writeln!(out, "{label}[{} ..] : {}", symbol_label(node.key()), node.frequency())?,
        }
        if let Some((left, right)) = node.children() {
            stack.push((right, depth + 1, "[RIGHT] "));
            stack.push((left, depth + 1, "[LEFT] "));
        }
    }
    Ok(())
}

/// Renders each leaf's symbol alongside its assigned weight, in ascending
/// symbol order.
pub fn write_weights<W: Write>(tree: &CodeTree, out: &mut W) -> io::Result<()> {
    for node in tree.leaves() {
        let Some(symbol) = node.symbol() else { continue };
        match node.weight() {
            Some(code) => writeln!(out, "symbol [{}] weights : {}", symbol_label(symbol), code)?,
            None => writeln!(out, "symbol [{}] weights : <unassigned>", symbol_label(symbol))?,
        }
    }
    Ok(())
}

fn symbol_label(symbol: u8) -> String {
    if symbol.is_ascii_graphic() || symbol == b' ' {
        format!("{:#04x} '{}'", symbol, symbol as char)
    } else {
        format!("{symbol:#04x}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::freq::FrequencyTable;
    use crate::tree::CodeTree;

    fn sample_tree() -> CodeTree {
        let table = FrequencyTable::from_entries([(b'a', 5), (b'b', 9), (b'c', 12)]).unwrap();
        CodeTree::from_table(&table).unwrap()
    }

    #[test]
    fn tree_rendering_lists_every_node_once() {
        let tree = sample_tree();
        let mut out = Vec::new();
        write_tree(&tree, &mut out).unwrap();
        let rendered = String::from_utf8(out).unwrap();
        assert_eq!(rendered.lines().count(), tree.node_count());
        assert!(rendered.contains("[LEFT] "));
        assert!(rendered.contains("[RIGHT] "));
        assert!(rendered.contains("'a'"));
    }

    #[test]
    fn weight_rendering_lists_every_leaf_with_its_code() {
        let tree = sample_tree();
        let codes = tree.code_table().unwrap();
        let mut out = Vec::new();
        write_weights(&tree, &mut out).unwrap();
        let rendered = String::from_utf8(out).unwrap();
        assert_eq!(rendered.lines().count(), tree.leaf_count());
        for (_, code) in codes.iter() {
            assert!(rendered.contains(&format!(" : {code}")));
        }
        assert!(!rendered.contains("<unassigned>"));
    }

    #[test]
    fn non_printable_symbols_render_as_hex() {
        let table = FrequencyTable::from_entries([(0x00, 1), (0xff, 2)]).unwrap();
        let tree = CodeTree::from_table(&table).unwrap();
        let mut out = Vec::new();
        write_weights(&tree, &mut out).unwrap();
        let rendered = String::from_utf8(out).unwrap();
        assert!(rendered.contains("[0x00]"));
        assert!(rendered.contains("[0xff]"));
    }
}
