//! Rich-text content model and parser.
//!
//! Chapter content is stored as a constrained HTML dialect. [`parse`] turns it
//! into an ordered tree of block nodes ([`Node`]) whose text is carried in
//! inline style [`Run`]s. The parser is deliberately forgiving: unknown tags
//! are unwrapped to their text content, mismatched or unclosed tags are closed
//! best-effort, and no input ever fails to parse. Document order is preserved
//! exactly.
//!
//! [`strip_tags`] is the companion primitive used by the patch engine: it
//! walks the same tokenizer and keeps only decoded text, so the text it
//! produces agrees with the run text the full parser would produce.

pub mod tokenizer;

use tokenizer::{Token, Tokenizer};

/// A contiguous span of text sharing the same inline styling.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(serde::Serialize))]
pub struct Run {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
}

impl Run {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }
}

/// A block-level node of parsed chapter content.
///
/// The set is closed on purpose: every consumer matches exhaustively, so a new
/// block kind is a compile-time-checked change across the whole engine.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(serde::Serialize))]
#[cfg_attr(feature = "cli", serde(tag = "type", rename_all = "snake_case"))]
pub enum Node {
    Heading { level: u8, runs: Vec<Run> },
    Paragraph { runs: Vec<Run> },
    List { ordered: bool, items: Vec<Vec<Run>> },
    Blockquote { children: Vec<Node> },
}

/// Parse rich-text chapter content into an ordered block tree.
///
/// Never fails. Empty or whitespace-only input produces an empty list.
pub fn parse(html: &str) -> Vec<Node> {
    let mut parser = Parser::new();
    for token in Tokenizer::new(html) {
        parser.handle(token);
    }
    parser.finish()
}

/// Strip markup from rich-text content, decoding entities.
///
/// Keeps every text segment verbatim (tag boundaries collapse to nothing), so
/// for text inside blocks the result equals the concatenation of the run text
/// [`parse`] would produce. The patch engine relies on this agreement.
pub fn strip_tags(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    for token in Tokenizer::new(html) {
        if let Token::Text(text) = token {
            out.push_str(&text);
        }
    }
    out
}

/// Concatenated plain text of a run slice.
pub fn runs_text(runs: &[Run]) -> String {
    runs.iter().map(|r| r.text.as_str()).collect()
}

#[derive(Debug)]
enum BlockKind {
    Paragraph,
    Heading(u8),
}

#[derive(Debug)]
struct OpenBlock {
    kind: BlockKind,
    runs: Vec<Run>,
}

#[derive(Debug)]
struct OpenList {
    ordered: bool,
    items: Vec<Vec<Run>>,
    current: Option<Vec<Run>>,
}

/// Streaming parser state.
///
/// `frames` holds one node list per open blockquote on top of the document
/// list; blocks and lists accumulate in `block`/`list` until closed (or until
/// end of input, which closes everything best-effort).
struct Parser {
    frames: Vec<Vec<Node>>,
    block: Option<OpenBlock>,
    list: Option<OpenList>,
    bold: u32,
    italic: u32,
}

impl Parser {
    fn new() -> Self {
        Self {
            frames: vec![Vec::new()],
            block: None,
            list: None,
            bold: 0,
            italic: 0,
        }
    }

    fn handle(&mut self, token: Token) {
        match token {
            Token::Open(name) => self.open(&name),
            Token::Close(name) => self.close(&name),
            // A self-closed block is an open immediately followed by a close;
            // for void tags like <br/> both are no-ops.
            Token::SelfClose(name) => {
                self.open(&name);
                self.close(&name);
            }
            Token::Text(text) => self.text(text),
        }
    }

    fn open(&mut self, name: &str) {
        match name {
            "p" => {
                self.flush_list();
                self.flush_block();
                self.block = Some(OpenBlock {
                    kind: BlockKind::Paragraph,
                    runs: Vec::new(),
                });
            }
            _ if heading_level(name).is_some() => {
                self.flush_list();
                self.flush_block();
                self.block = Some(OpenBlock {
                    kind: BlockKind::Heading(heading_level(name).unwrap_or(1)),
                    runs: Vec::new(),
                });
            }
            "ul" | "ol" => {
                self.flush_block();
                match &mut self.list {
                    // A nested list degrades into the outer one: its items
                    // keep flowing, no content is lost.
                    Some(list) => finish_item(list),
                    None => {
                        self.list = Some(OpenList {
                            ordered: name == "ol",
                            items: Vec::new(),
                            current: None,
                        });
                    }
                }
            }
            "li" => match &mut self.list {
                Some(list) => {
                    finish_item(list);
                    list.current = Some(Vec::new());
                }
                // A stray <li> outside any list reads like a paragraph.
                None => {
                    self.flush_block();
                    self.block = Some(OpenBlock {
                        kind: BlockKind::Paragraph,
                        runs: Vec::new(),
                    });
                }
            },
            "blockquote" => {
                self.flush_list();
                self.flush_block();
                self.frames.push(Vec::new());
            }
            "strong" | "b" => self.bold += 1,
            "em" | "i" => self.italic += 1,
            // Unknown tags are unwrapped: their text flows through unchanged.
            _ => {}
        }
    }

    fn close(&mut self, name: &str) {
        match name {
            "p" => self.flush_block(),
            _ if heading_level(name).is_some() => self.flush_block(),
            "ul" | "ol" => self.flush_list(),
            "li" => {
                if let Some(list) = &mut self.list {
                    finish_item(list);
                }
            }
            "blockquote" => {
                self.flush_list();
                self.flush_block();
                self.pop_frame();
            }
            "strong" | "b" => self.bold = self.bold.saturating_sub(1),
            "em" | "i" => self.italic = self.italic.saturating_sub(1),
            _ => {}
        }
    }

    fn text(&mut self, text: String) {
        let bold = self.bold > 0;
        let italic = self.italic > 0;

        if let Some(list) = &mut self.list {
            match &mut list.current {
                Some(item) => push_run(item, text, bold, italic),
                // Stray text between items opens an implicit item; whitespace
                // between items carries no content and is dropped.
                None if !text.trim().is_empty() => {
                    let mut item = Vec::new();
                    push_run(&mut item, text, bold, italic);
                    list.current = Some(item);
                }
                None => {}
            }
        } else if let Some(block) = &mut self.block {
            push_run(&mut block.runs, text, bold, italic);
        } else if !text.trim().is_empty() {
            // Bare text outside any block becomes an implicit paragraph, so
            // no content is silently lost.
            let mut runs = Vec::new();
            push_run(&mut runs, text, bold, italic);
            self.block = Some(OpenBlock {
                kind: BlockKind::Paragraph,
                runs,
            });
        }
    }

    fn flush_block(&mut self) {
        if let Some(block) = self.block.take() {
            if block.runs.is_empty() {
                return;
            }
            let node = match block.kind {
                BlockKind::Paragraph => Node::Paragraph { runs: block.runs },
                BlockKind::Heading(level) => Node::Heading {
                    level,
                    runs: block.runs,
                },
            };
            self.push_node(node);
        }
    }

    fn flush_list(&mut self) {
        if let Some(mut list) = self.list.take() {
            finish_item(&mut list);
            if !list.items.is_empty() {
                self.push_node(Node::List {
                    ordered: list.ordered,
                    items: list.items,
                });
            }
        }
    }

    fn pop_frame(&mut self) {
        // The bottom frame is the document itself; a stray </blockquote>
        // must not pop it.
        if self.frames.len() > 1 {
            let children = self.frames.pop().unwrap_or_default();
            self.push_node(Node::Blockquote { children });
        }
    }

    fn push_node(&mut self, node: Node) {
        if let Some(frame) = self.frames.last_mut() {
            frame.push(node);
        }
    }

    fn finish(mut self) -> Vec<Node> {
        self.flush_list();
        self.flush_block();
        // Close any blockquotes left open at end of input.
        while self.frames.len() > 1 {
            self.pop_frame();
        }
        self.frames.pop().unwrap_or_default()
    }
}

fn heading_level(name: &str) -> Option<u8> {
    match name {
        "h1" => Some(1),
        "h2" => Some(2),
        "h3" => Some(3),
        "h4" => Some(4),
        "h5" => Some(5),
        "h6" => Some(6),
        _ => None,
    }
}

/// Append text to a run list, merging with the last run when the inline
/// styling is unchanged.
fn push_run(runs: &mut Vec<Run>, text: String, bold: bool, italic: bool) {
    if text.is_empty() {
        return;
    }
    if let Some(last) = runs.last_mut() {
        if last.bold == bold && last.italic == italic {
            last.text.push_str(&text);
            return;
        }
    }
    runs.push(Run { text, bold, italic });
}

fn finish_item(list: &mut OpenList) {
    if let Some(item) = list.current.take() {
        if !item.is_empty() {
            list.items.push(item);
        }
    }
}
