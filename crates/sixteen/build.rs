use std::{fs, path::PathBuf};

/// Segment names, in mask bit order.
const SEGMENT_NAMES: [&str; 16] = [
    "a1", "a2", "b", "c", "d1", "d2", "e", "f", "g1", "g2", "h", "i", "j", "k", "l", "m",
];

/// A single line of the character table.
#[derive(Debug, Clone)]
struct Entry {
    character: char,
    mask: u32,
}

impl Entry {
    /// Parse a `<char> <segment>...` line.
    fn from_line(line: &str) -> Result<Self, String> {
        let mut parts = line.split_whitespace();

        let character = match parts.next() {
            Some("space") => ' ',
            Some(token) if token.chars().count() == 1 => token.chars().next().unwrap(),
            other => return Err(format!("bad character token {other:?}")),
        };

        let mut mask = 0;
        for name in parts {
            let bit = SEGMENT_NAMES
                .iter()
                .position(|s| *s == name)
                .ok_or_else(|| format!("unknown segment {name:?}"))?;
            mask |= 1 << bit;
        }

        Ok(Self { character, mask })
    }
}

/// Load the character table, skipping blank lines and comments.
fn load_table(file: &str) -> Vec<Entry> {
    let mut entries: Vec<Entry> = Vec::new();

    for (number, line) in file.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let entry = Entry::from_line(line)
            .unwrap_or_else(|e| panic!("characters.txt:{}: {}", number + 1, e));

        if entries.iter().any(|e| e.character == entry.character) {
            panic!(
                "characters.txt:{}: duplicate entry for {:?}",
                number + 1,
                entry.character
            );
        }

        entries.push(entry);
    }

    entries
}

/// Generate the lookup code that will be included in the crate.
fn generate_rust(entries: &[Entry]) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "static CHARACTER_MASKS: [(char, CharacterMask); {}] = [\n",
        entries.len()
    ));
    for entry in entries {
        out.push_str(&format!(
            "    ({:?}, 0b{:016b}),\n",
            entry.character, entry.mask
        ));
    }
    out.push_str("];\n\n");

    out.push_str("fn lookup(c: char) -> Option<CharacterMask> {\n");
    out.push_str("    match c {\n");
    for entry in entries {
        out.push_str(&format!(
            "        {:?} => Some(0b{:016b}),\n",
            entry.character, entry.mask
        ));
    }
    out.push_str("        _ => None,\n");
    out.push_str("    }\n");
    out.push_str("}\n");

    out
}

fn main() {
    let table = fs::read_to_string("data/characters.txt").unwrap();

    let entries = load_table(&table);

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let out_file = out_dir.join("sixteen_segment_table.rs");

    fs::write(out_file, generate_rust(&entries)).unwrap();

    println!("cargo:rerun-if-changed=data/characters.txt");
}
