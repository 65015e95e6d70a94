use html5ever::tendril::StrTendril;
use html5ever::tokenizer::{
    BufferQueue, TagKind, Token, TokenSink, TokenSinkResult, Tokenizer, TokenizerOpts,
};

/// An `<a>` element whose closing tag was seen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    pub href: Option<String>,
    /// Inner text with surrounding whitespace trimmed
    pub text: String,
}

/// Token sink that tracks anchor open/close state.
///
/// Tag and attribute names arrive lowercased from the tokenizer and character
/// references are already decoded, so `<A HREF=...>` and `<a href=...>` are
/// handled the same way.
#[derive(Default)]
struct AnchorSink {
    in_anchor: bool,
    href: Option<String>,
    text: String,
    completed: Vec<Anchor>,
}

impl TokenSink for AnchorSink {
    type Handle = ();

    fn process_token(&mut self, token: Token, _line_number: u64) -> TokenSinkResult<()> {
        match token {
            Token::TagToken(tag) if &*tag.name == "a" => match tag.kind {
                TagKind::StartTag => {
                    self.in_anchor = true;
                    self.text.clear();
                    self.href = tag
                        .attrs
                        .iter()
                        .find(|attr| &*attr.name.local == "href")
                        .map(|attr| attr.value.to_string());
                }
                TagKind::EndTag => {
                    if self.in_anchor {
                        self.completed.push(Anchor {
                            href: self.href.take(),
                            text: self.text.trim().to_string(),
                        });
                        self.in_anchor = false;
                        self.text.clear();
                    }
                }
            },
            Token::CharacterTokens(chars) if self.in_anchor => {
                self.text.push_str(&chars);
            }
            _ => {}
        }

        TokenSinkResult::Continue
    }
}

/// Tokenize an HTML fragment and return every closed anchor, in order.
///
/// An anchor left open at the end of the fragment is not returned.
pub fn parse_anchors(fragment: &str) -> Vec<Anchor> {
    let mut input = BufferQueue::new();
    input.push_back(StrTendril::from_slice(fragment));

    let mut tokenizer = Tokenizer::new(AnchorSink::default(), TokenizerOpts::default());
    let _ = tokenizer.feed(&mut input);
    tokenizer.end();

    tokenizer.sink.completed
}
