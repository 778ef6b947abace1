// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, error};

// Arena trie. Node 0 is the root (empty prefix). Every node is created after
// its parent, so children always have larger indexes than their parent.
// Arcs are kept sorted by tile, at most 26 per node.
#[derive(Clone, Default)]
struct Node {
    accepts: bool,
    arcs: Vec<(u8, u32)>,
}

#[derive(Clone)]
pub struct WordIndex {
    nodes: Vec<Node>,
    num_words: usize,
}

impl Default for WordIndex {
    fn default() -> Self {
        Self::new()
    }
}

// The binary layout, per node:
// - 1 byte: 1 if a word ends here, else 0
// - 4 bytes big endian: number of children
// - per child: 1 byte uppercase letter, 4 bytes big endian length of the
//   child's encoding, then the child's encoding.
const NODE_HEADER_LEN: usize = 5;
const ARC_HEADER_LEN: usize = 5;

impl WordIndex {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::default()],
            num_words: 0,
        }
    }

    // one word per line, blank lines skipped.
    pub fn from_word_list(giant_string: &str) -> error::Returns<Self> {
        let mut ret = Self::new();
        for (line_num, s) in giant_string.lines().enumerate() {
            let s = s.trim();
            if s.is_empty() {
                continue;
            }
            if let Err(err) = ret.insert(s) {
                return_error!(format!("line {}: {}", line_num + 1, err));
            }
        }
        tracing::debug!(words = ret.num_words, nodes = ret.nodes.len(), "built word index");
        Ok(ret)
    }

    // a .txt file is a word list, anything else a serialized index.
    pub fn load(path: &str) -> error::Returns<Self> {
        if path.ends_with(".txt") {
            Self::from_word_list(&std::fs::read_to_string(path)?)
        } else {
            Self::deserialize(&std::fs::read(path)?)
        }
    }

    #[inline(always)]
    pub fn root(&self) -> u32 {
        0
    }

    #[inline(always)]
    pub fn accepts(&self, p: u32) -> bool {
        self.nodes[p as usize].accepts
    }

    // the (tile, child) arcs out of p, sorted by tile.
    #[inline(always)]
    pub fn arcs(&self, p: u32) -> &[(u8, u32)] {
        &self.nodes[p as usize].arcs
    }

    #[inline(always)]
    pub fn seek(&self, p: u32, tile: u8) -> Option<u32> {
        let arcs = &self.nodes[p as usize].arcs;
        arcs.binary_search_by_key(&tile, |&(t, _)| t)
            .ok()
            .map(|i| arcs[i].1)
    }

    // follows tiles from p. blank bits are ignored.
    #[inline(always)]
    pub fn seek_all<I: IntoIterator<Item = u8>>(&self, mut p: u32, tiles: I) -> Option<u32> {
        for tile in tiles {
            p = self.seek(p, tile & 0x7f)?;
        }
        Some(p)
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.num_words
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.num_words == 0
    }

    #[inline(always)]
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    // tiles are 1..=26. inserting an existing word does nothing.
    pub fn insert_machine_word(&mut self, word: &[u8]) {
        let mut p = 0usize;
        for &tile in word {
            p = match self.nodes[p].arcs.binary_search_by_key(&tile, |&(t, _)| t) {
                Ok(i) => self.nodes[p].arcs[i].1 as usize,
                Err(i) => {
                    let q = self.nodes.len();
                    self.nodes.push(Node::default());
                    self.nodes[p].arcs.insert(i, (tile, q as u32));
                    q
                }
            };
        }
        if !self.nodes[p].accepts {
            self.nodes[p].accepts = true;
            self.num_words += 1;
        }
    }

    pub fn insert(&mut self, word: &str) -> error::Returns<()> {
        if word.is_empty() {
            return_error!("cannot insert an empty word".into());
        }
        let mut v = Vec::with_capacity(word.len());
        for c in word.bytes() {
            match alphabet::letter_tile_of(c) {
                Some(tile) => v.push(tile),
                None => {
                    return_error!(format!("invalid letter after {:?} in {:?}", v, word));
                }
            }
        }
        self.insert_machine_word(&v);
        Ok(())
    }

    // exact match, case-insensitive.
    pub fn is_valid(&self, word: &str) -> bool {
        let mut p = self.root();
        for c in word.bytes() {
            match alphabet::letter_tile_of(c).and_then(|tile| self.seek(p, tile)) {
                Some(q) => p = q,
                None => return false,
            }
        }
        self.accepts(p)
    }

    pub fn words(&self) -> Words<'_> {
        Words {
            index: self,
            stack: vec![(self.root(), 0)],
            word: String::new(),
            fresh: true,
        }
    }

    pub fn serialize(&self) -> Vec<u8> {
        // children come after parents, so one backwards pass sizes every subtree.
        let mut encoded_lens = vec![0usize; self.nodes.len()];
        for p in (0..self.nodes.len()).rev() {
            encoded_lens[p] = NODE_HEADER_LEN
                + self.nodes[p]
                    .arcs
                    .iter()
                    .map(|&(_, q)| ARC_HEADER_LEN + encoded_lens[q as usize])
                    .sum::<usize>();
        }
        let mut ret = Vec::with_capacity(encoded_lens[0]);
        // preorder with an explicit stack. tile 0 marks the root, which has no arc header.
        let mut stack = vec![(0u8, self.root())];
        while let Some((tile, p)) = stack.pop() {
            if tile != 0 {
                ret.push(alphabet::letter_of(tile) as u8);
                ret.extend_from_slice(&(encoded_lens[p as usize] as u32).to_be_bytes());
            }
            let node = &self.nodes[p as usize];
            ret.push(node.accepts as u8);
            ret.extend_from_slice(&(node.arcs.len() as u32).to_be_bytes());
            stack.extend(node.arcs.iter().rev().copied());
        }
        ret
    }

    pub fn deserialize(buf: &[u8]) -> error::Returns<Self> {
        let mut reader = Reader { buf, ofs: 0 };
        let mut ret = Self {
            nodes: Vec::new(),
            num_words: 0,
        };
        let (accepts, num_children) = reader.node_header()?;
        ret.push_node(accepts);

        struct Frame {
            p: u32,
            remaining: u32,
            end: Option<usize>,
        }
        let mut stack = vec![Frame {
            p: 0,
            remaining: num_children,
            end: None,
        }];
        while let Some(frame) = stack.last_mut() {
            if frame.remaining == 0 {
                if let Some(end) = frame.end {
                    if reader.ofs != end {
                        return_error!(format!(
                            "child encoding ends at byte {}, length says {}",
                            reader.ofs, end
                        ));
                    }
                }
                stack.pop();
                continue;
            }
            frame.remaining -= 1;
            let p = frame.p;
            let tag = reader.byte()?;
            let tile = match tag {
                b'A'..=b'Z' => tag & 0x3f,
                _ => {
                    return_error!(format!(
                        "invalid letter tag {:#04x} at byte {}",
                        tag,
                        reader.ofs - 1
                    ));
                }
            };
            let child_len = reader.u32_be()? as usize;
            let end = reader.ofs + child_len;
            if end > buf.len() {
                return_error!(format!(
                    "child length {} at byte {} overruns the buffer",
                    child_len,
                    reader.ofs - 4
                ));
            }
            let (accepts, num_children) = reader.node_header()?;
            let q = ret.push_node(accepts);
            let arcs = &mut ret.nodes[p as usize].arcs;
            match arcs.binary_search_by_key(&tile, |&(t, _)| t) {
                Ok(_) => {
                    return_error!(format!("duplicate letter {} under one node", tag as char));
                }
                Err(i) => arcs.insert(i, (tile, q)),
            }
            stack.push(Frame {
                p: q,
                remaining: num_children,
                end: Some(end),
            });
        }
        if reader.ofs != buf.len() {
            return_error!(format!(
                "{} trailing bytes after the root node",
                buf.len() - reader.ofs
            ));
        }
        tracing::debug!(words = ret.num_words, nodes = ret.nodes.len(), "loaded word index");
        Ok(ret)
    }

    fn push_node(&mut self, accepts: bool) -> u32 {
        let q = self.nodes.len() as u32;
        self.nodes.push(Node {
            accepts,
            arcs: Vec::new(),
        });
        self.num_words += accepts as usize;
        q
    }
}

struct Reader<'a> {
    buf: &'a [u8],
    ofs: usize,
}

impl Reader<'_> {
    fn byte(&mut self) -> error::Returns<u8> {
        match self.buf.get(self.ofs) {
            Some(&b) => {
                self.ofs += 1;
                Ok(b)
            }
            None => {
                return_error!(format!("truncated at byte {}", self.ofs));
            }
        }
    }

    fn u32_be(&mut self) -> error::Returns<u32> {
        match self.buf.get(self.ofs..self.ofs + 4) {
            Some(b) => {
                self.ofs += 4;
                Ok(u32::from_be_bytes([b[0], b[1], b[2], b[3]]))
            }
            None => {
                return_error!(format!("truncated at byte {}", self.ofs));
            }
        }
    }

    fn node_header(&mut self) -> error::Returns<(bool, u32)> {
        let accepts = match self.byte()? {
            0 => false,
            1 => true,
            b => {
                return_error!(format!(
                    "invalid terminal flag {} at byte {}",
                    b,
                    self.ofs - 1
                ));
            }
        };
        let num_children = self.u32_be()?;
        if num_children > 26 {
            return_error!(format!(
                "node at byte {} claims {} children",
                self.ofs - NODE_HEADER_LEN,
                num_children
            ));
        }
        Ok((accepts, num_children))
    }
}

// Depth-first, alphabetical. Each call to words() starts over.
pub struct Words<'a> {
    index: &'a WordIndex,
    stack: Vec<(u32, usize)>,
    word: String,
    fresh: bool,
}

impl Iterator for Words<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let index = self.index;
        if self.fresh {
            self.fresh = false;
            if index.accepts(index.root()) {
                return Some(String::new());
            }
        }
        while let Some(top) = self.stack.last_mut() {
            let arcs = index.arcs(top.0);
            if top.1 < arcs.len() {
                let (tile, q) = arcs[top.1];
                top.1 += 1;
                self.word.push(alphabet::letter_of(tile));
                self.stack.push((q, 0));
                if index.accepts(q) {
                    return Some(self.word.clone());
                }
            } else {
                self.stack.pop();
                self.word.pop();
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_index(words: &[&str]) -> WordIndex {
        let mut index = WordIndex::new();
        for word in words {
            index.insert(word).unwrap();
        }
        index
    }

    #[test]
    fn load_reads_word_lists_and_serialized_indexes() {
        let dir = std::env::temp_dir().join(format!("scrabfeat-load-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let txt = dir.join("words.txt");
        let idx = dir.join("words.idx");
        std::fs::write(&txt, "cat\n\nscat\n").unwrap();
        let from_txt = WordIndex::load(txt.to_str().unwrap()).unwrap();
        assert_eq!(from_txt.len(), 2);
        std::fs::write(&idx, from_txt.serialize()).unwrap();
        let from_idx = WordIndex::load(idx.to_str().unwrap()).unwrap();
        assert!(from_idx.words().eq(from_txt.words()));
        // a word list read as binary is rejected.
        std::fs::copy(&txt, &idx).unwrap();
        assert!(WordIndex::load(idx.to_str().unwrap()).is_err());
        assert!(WordIndex::load(dir.join("missing.txt").to_str().unwrap()).is_err());
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn inserted_words_are_valid() {
        let index = make_index(&["CAT", "CAR", "CART", "at"]);
        assert!(index.is_valid("CAT"));
        assert!(index.is_valid("cart"));
        assert!(index.is_valid("AT"));
        assert!(!index.is_valid("CA"));
        assert!(!index.is_valid("CARTS"));
        assert!(!index.is_valid("CAB"));
        assert!(!index.is_valid(""));
        assert!(!index.is_valid("C?T"));
        assert_eq!(index.len(), 4);
    }

    #[test]
    fn duplicate_insertion_is_silent() {
        let mut index = make_index(&["QI"]);
        let num_nodes = index.num_nodes();
        index.insert("qi").unwrap();
        assert_eq!(index.len(), 1);
        assert_eq!(index.num_nodes(), num_nodes);
    }

    #[test]
    fn bad_words_are_rejected() {
        let mut index = WordIndex::new();
        assert!(index.insert("").is_err());
        assert!(index.insert("CA T").is_err());
        assert!(index.is_empty());
        assert!(WordIndex::from_word_list("AA\nB3\n").is_err());
    }

    #[test]
    fn empty_index_knows_nothing() {
        let index = WordIndex::new();
        assert!(!index.is_valid("A"));
        assert!(!index.is_valid("CAT"));
        assert_eq!(index.words().count(), 0);
        let back = WordIndex::deserialize(&index.serialize()).unwrap();
        assert!(back.is_empty());
    }

    #[test]
    fn words_are_listed_alphabetically_and_restartable() {
        let index = WordIndex::from_word_list("ZA\nCAT\n\nAA\nCA\nCATS\n").unwrap();
        let words = index.words().collect::<Vec<_>>();
        assert_eq!(words, ["AA", "CA", "CAT", "CATS", "ZA"]);
        assert_eq!(index.words().collect::<Vec<_>>(), words);
        let mut it = index.words();
        assert_eq!(it.next().as_deref(), Some("AA"));
        assert_eq!(index.words().next().as_deref(), Some("AA"));
    }

    #[test]
    fn serialized_layout_is_length_prefixed() {
        let index = make_index(&["A"]);
        assert_eq!(
            index.serialize(),
            [
                0, 0, 0, 0, 1, // root: not a word, one child
                b'A', 0, 0, 0, 5, // 'A', child is 5 bytes
                1, 0, 0, 0, 0, // "A" is a word, no children
            ]
        );
    }

    #[test]
    fn round_trip_preserves_membership() {
        let words = ["CAT", "CAR", "CARE", "CARED", "DOG", "DOGE", "ZZZ", "QI"];
        let index = make_index(&words);
        let buf = index.serialize();
        let back = WordIndex::deserialize(&buf).unwrap();
        for word in words {
            assert!(back.is_valid(word), "{} lost", word);
        }
        for word in ["CA", "CARES", "DO", "ZZ", "Q", "DOGS"] {
            assert!(!back.is_valid(word), "{} appeared", word);
        }
        assert_eq!(back.len(), words.len());
        assert_eq!(back.serialize(), buf);
        assert_eq!(
            back.words().collect::<Vec<_>>(),
            index.words().collect::<Vec<_>>()
        );
    }

    #[test]
    fn children_in_any_order_are_accepted() {
        // "B" then "A", as an insertion-ordered writer would emit for BA, AB.
        let buf = [
            0, 0, 0, 0, 2, //
            b'B', 0, 0, 0, 15, 0, 0, 0, 0, 1, b'A', 0, 0, 0, 5, 1, 0, 0, 0, 0, //
            b'A', 0, 0, 0, 15, 0, 0, 0, 0, 1, b'B', 0, 0, 0, 5, 1, 0, 0, 0, 0,
        ];
        let index = WordIndex::deserialize(&buf).unwrap();
        assert!(index.is_valid("BA"));
        assert!(index.is_valid("AB"));
        assert_eq!(index.words().collect::<Vec<_>>(), ["AB", "BA"]);
    }

    #[test]
    fn malformed_buffers_are_errors() {
        let buf = make_index(&["CAT", "DOG"]).serialize();
        assert!(WordIndex::deserialize(&buf[..buf.len() - 1]).is_err());
        assert!(WordIndex::deserialize(&[]).is_err());
        let mut trailing = buf.clone();
        trailing.push(0);
        assert!(WordIndex::deserialize(&trailing).is_err());
        let mut bad_tag = buf.clone();
        bad_tag[5] = b'a';
        assert!(WordIndex::deserialize(&bad_tag).is_err());
        let mut bad_len = buf.clone();
        bad_len[9] += 1;
        assert!(WordIndex::deserialize(&bad_len).is_err());
    }
}
