//! Parser components.
//!
//! The parser reads the document line by line.
//! The nesting is decided by the indent of each line only,
//! with a stack of the collections that are still being populated.
pub use self::{
    error::DecodeError,
    line::{Line, Lines},
    scalar::parse_primitive,
};
use self::line::item_body;
use crate::{anchors::*, Map, Seq, Yaml};
use std::iter::Peekable;
use tracing::{debug, trace};

mod error;
mod line;
mod scalar;

/// The special key of merging.
pub const MERGE_KEY: &str = "<<";

/// Where a finished value goes in its parent.
enum Slot {
    Key(String),
    Item,
}

/// An opened collection.
struct Frame {
    indent: usize,
    /// A sequence whose items sit at the same column as its key.
    compact: bool,
    slot: Slot,
    anchor: Option<String>,
    body: Yaml,
}

impl Frame {
    fn closed_by(&self, line: &Line) -> bool {
        line.indent < self.indent
            || (line.indent == self.indent && !(self.compact && line.is_item()))
    }
}

/// Style of the block scalar.
#[derive(Clone, Copy)]
enum Block {
    /// `|`, keep the newlines.
    Literal,
    /// `>`, fold the newlines into spaces.
    Folded,
}

impl Block {
    fn from_indicator(token: &str) -> Option<Self> {
        match token {
            "|" | "|-" | "|+" => Some(Self::Literal),
            ">" | ">-" | ">+" => Some(Self::Folded),
            _ => None,
        }
    }
}

/// An indentation driven YAML parser.
///
/// The root is the implicit bottom of the context stack.
/// It is a sequence if the first line is a sequence item, otherwise a map.
/// A document of a single line without any structure is a scalar.
///
/// ```
/// use weak_yaml::{parser::Parser, yaml_map};
/// let n = Parser::new("a: 1\nb:\n  c: true\n").parse().unwrap();
/// assert_eq!(n, yaml_map! { "a" => 1, "b" => yaml_map! { "c" => true } });
/// ```
///
/// Each parser is used for one document, the anchors are never shared between documents.
pub struct Parser<'a> {
    lines: Peekable<Lines<'a>>,
    root: Yaml,
    stack: Vec<Frame>,
    anchors: Anchors,
}

impl<'a> Parser<'a> {
    /// Create a parser with the document.
    pub fn new(doc: &'a str) -> Self {
        let mut lines = Lines::new(doc).peekable();
        let root = match lines.peek() {
            Some(line) if line.is_item() => Yaml::Seq(Seq::new()),
            _ => Yaml::Map(Map::new()),
        };
        Self {
            lines,
            root,
            stack: Vec::new(),
            anchors: Anchors::default(),
        }
    }

    /// Parse the entire document.
    pub fn parse(mut self) -> Result<Yaml, DecodeError> {
        if let Some(yaml) = self.scalar_root()? {
            return Ok(yaml);
        }
        while let Some(line) = self.lines.next() {
            self.line(line)?;
        }
        while !self.stack.is_empty() {
            self.pop();
        }
        Ok(self.root)
    }

    fn scalar_root(&self) -> Result<Option<Yaml>, DecodeError> {
        let mut lines = self.lines.clone();
        let line = match (lines.next(), lines.next()) {
            (Some(line), None) if !line.is_item() && split_key(line.content).is_none() => line,
            _ => return Ok(None),
        };
        let (_, token) = split_anchor(line.content);
        let yaml = match alias_name(token) {
            Some(name) => self.anchors.resolve(name, line.number)?,
            None => parse_primitive(token).map_err(|e| e.at(line.number))?,
        };
        Ok(Some(yaml))
    }

    fn body_mut(&mut self) -> &mut Yaml {
        match self.stack.last_mut() {
            Some(frame) => &mut frame.body,
            None => &mut self.root,
        }
    }

    fn push(&mut self, frame: Frame) {
        trace!(
            indent = frame.indent,
            kind = frame.body.kind(),
            "open a collection"
        );
        self.stack.push(frame);
    }

    /// Close the top collection and attach it to its parent.
    fn pop(&mut self) {
        if let Some(frame) = self.stack.pop() {
            trace!(indent = frame.indent, "close a collection");
            if let Some(name) = frame.anchor {
                self.anchors.insert(name, &frame.body);
            }
            self.attach(frame.slot, frame.body);
        }
    }

    fn attach(&mut self, slot: Slot, yaml: Yaml) {
        let body = self.body_mut();
        let kind = body.kind();
        let attached = match slot {
            Slot::Key(key) => body.bind(key, yaml),
            Slot::Item => body.push(yaml),
        };
        if !attached {
            debug!(kind, "drop a value that does not fit its parent");
        }
    }

    fn line(&mut self, line: Line<'a>) -> Result<(), DecodeError> {
        while self
            .stack
            .last()
            .map_or(false, |frame| frame.closed_by(&line))
        {
            self.pop();
        }
        if let Some(rest) = item_body(line.content) {
            let rest = rest.trim_start();
            if self.body_mut().as_seq().is_none() {
                debug!(line = line.number, "skip a sequence item outside of a sequence");
                return Ok(());
            }
            match split_key(rest) {
                Some((key, value)) => {
                    self.push(Frame {
                        indent: line.indent,
                        compact: false,
                        slot: Slot::Item,
                        anchor: None,
                        body: Yaml::Map(Map::new()),
                    });
                    let column = line.indent + line.content.len() - rest.len();
                    self.entry(line, column, key, value)
                }
                None => self.value(line, line.indent, Slot::Item, rest),
            }
        } else if let Some((key, value)) = split_key(line.content) {
            self.entry(line, line.indent, key, value)
        } else {
            debug!(
                line = line.number,
                content = line.content,
                "skip a line without structure"
            );
            Ok(())
        }
    }

    /// A `key: value` pair in the current map.
    fn entry(
        &mut self,
        line: Line<'a>,
        indent: usize,
        key: &str,
        value: &str,
    ) -> Result<(), DecodeError> {
        if self.body_mut().as_map().is_none() {
            debug!(line = line.number, key, "skip a map entry in a sequence");
            return Ok(());
        }
        if key == MERGE_KEY {
            if let Some(name) = alias_name(value) {
                let source = self.anchors.resolve(name, line.number)?;
                match (source, self.body_mut()) {
                    (Yaml::Map(source), Yaml::Map(target)) => merge(target, source),
                    (source, _) => debug!(
                        line = line.number,
                        kind = source.kind(),
                        "skip merging a value which is not a map"
                    ),
                }
                return Ok(());
            }
        }
        self.value(line, indent, Slot::Key(key.to_string()), value)
    }

    /// A value position, which may be an anchor, an alias,
    /// a nested collection, a block scalar or an inline token.
    fn value(
        &mut self,
        line: Line<'a>,
        indent: usize,
        slot: Slot,
        token: &str,
    ) -> Result<(), DecodeError> {
        let (anchor, token) = split_anchor(token);
        if token.is_empty() {
            // Only a key can own items at its own column
            let keyed = matches!(slot, Slot::Key(_));
            let (body, compact) = match self.lines.peek() {
                Some(next) if next.is_item() && next.indent > indent => {
                    (Yaml::Seq(Seq::new()), false)
                }
                Some(next) if next.is_item() && next.indent == indent && keyed => {
                    (Yaml::Seq(Seq::new()), true)
                }
                _ => (Yaml::Map(Map::new()), false),
            };
            self.push(Frame {
                indent,
                compact,
                slot,
                anchor,
                body,
            });
            return Ok(());
        }
        let yaml = if let Some(style) = Block::from_indicator(token) {
            self.block(indent, style)
        } else if let Some(name) = alias_name(token) {
            self.anchors.resolve(name, line.number)?
        } else {
            parse_primitive(token).map_err(|e| e.at(line.number))?
        };
        if let Some(name) = anchor {
            self.anchors.insert(name, &yaml);
        }
        self.attach(slot, yaml);
        Ok(())
    }

    /// Consume the lines deeper than `indent` as a block scalar.
    fn block(&mut self, indent: usize, style: Block) -> Yaml {
        let mut lines = Vec::new();
        while let Some(line) = self.lines.next_if(|line| line.indent > indent) {
            lines.push(line);
        }
        let base = lines.iter().map(|line| line.indent).min().unwrap_or_default();
        let lines = lines
            .iter()
            .map(|line| " ".repeat(line.indent - base) + line.content)
            .collect::<Vec<_>>();
        Yaml::Str(match style {
            Block::Literal => lines.join("\n"),
            Block::Folded => lines.join(" "),
        })
    }
}

/// Split a `key: value` line.
///
/// The first colon followed by a white space or the end of line is the splitter.
/// A quoted key must be followed by the splitter right after its closing quote.
/// Inline collections are never keys.
fn split_key(content: &str) -> Option<(&str, &str)> {
    let is_splitter = |rest: &str| rest.chars().next().map_or(true, char::is_whitespace);
    match content.chars().next()? {
        '[' | '{' => None,
        q @ ('"' | '\'') => {
            let end = content[1..].find(q)? + 1;
            let rest = content[end + 1..].trim_start().strip_prefix(':')?;
            is_splitter(rest).then(|| (&content[1..end], rest.trim()))
        }
        _ => {
            let (i, _) = content
                .match_indices(':')
                .find(|(i, _)| is_splitter(&content[i + 1..]))?;
            let key = content[..i].trim();
            (!key.is_empty()).then(|| (key, content[i + 1..].trim()))
        }
    }
}

/// Parse YAML document.
///
/// A failed decode never returns a partial tree.
///
/// ```
/// use weak_yaml::{parse, parser::DecodeError, yaml_map, yaml_seq};
/// let n = parse("items: [1, 2, 3]").unwrap();
/// assert_eq!(n, yaml_map! { "items" => yaml_seq![1, 2, 3] });
/// assert!(matches!(
///     parse("alias: *missing"),
///     Err(DecodeError::UnresolvedAlias { .. })
/// ));
/// ```
pub fn parse(doc: &str) -> Result<Yaml, DecodeError> {
    Parser::new(doc).parse()
}
