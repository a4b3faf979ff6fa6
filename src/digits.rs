use rand::Rng;

use crate::DocumentError;

/// Digit value standing for the literal `X` check character of an RG.
pub const X_SENTINEL: u8 = 10;

/// Maps between text characters and digit values.
pub trait DigitCodec: Send + Sync {
    /// Returns the digit value of `c`, or `None` if `c` is not part of a document number.
    fn decode(&self, c: char) -> Option<u8>;

    /// Renders a digit value back to its character.
    fn encode(&self, digit: u8) -> char;
}

/// Plain decimal digits `0`-`9`.
pub struct DecimalCodec;

/// Decimal digits plus `x`/`X`, which decodes to [X_SENTINEL].
pub struct DecimalWithXCodec;

impl DigitCodec for DecimalCodec {
    fn decode(&self, c: char) -> Option<u8> {
        if c.is_ascii_digit() {
            Some(c as u8 - b'0')
        } else {
            None
        }
    }

    fn encode(&self, digit: u8) -> char {
        char::from(b'0' + digit % 10)
    }
}

impl DigitCodec for DecimalWithXCodec {
    fn decode(&self, c: char) -> Option<u8> {
        match c {
            'x' | 'X' => Some(X_SENTINEL),
            _ => DecimalCodec.decode(c),
        }
    }

    fn encode(&self, digit: u8) -> char {
        if digit == X_SENTINEL {
            'X'
        } else {
            DecimalCodec.encode(digit)
        }
    }
}

/// An ordered run of digit values extracted from a document number.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DigitSequence(Vec<u8>);

impl DigitSequence {
    pub fn new(digits: Vec<u8>) -> Self {
        Self(digits)
    }

    /// Keeps every character of `text` the codec understands, in order.
    pub fn extract(text: &str, codec: &dyn DigitCodec) -> Self {
        Self(text.chars().filter_map(|c| codec.decode(c)).collect())
    }

    pub fn random<R: Rng + ?Sized>(length: usize, rng: &mut R) -> Self {
        Self((0..length).map(|_| rng.gen_range(0..10)).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[cfg(any(test, feature = "testing", feature = "bench"))]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    pub fn extend_from_slice(&mut self, digits: &[u8]) {
        self.0.extend_from_slice(digits);
    }

    /// The sequence without its trailing `verification_length` digits.
    pub fn remove_verification_digits(
        &self,
        verification_length: usize,
    ) -> Result<&[u8], DocumentError> {
        let split = self.split_point(verification_length)?;
        Ok(&self.0[..split])
    }

    /// The trailing `verification_length` digits.
    pub fn extract_verification_digits(
        &self,
        verification_length: usize,
    ) -> Result<&[u8], DocumentError> {
        let split = self.split_point(verification_length)?;
        Ok(&self.0[split..])
    }

    pub fn join(&self, codec: &dyn DigitCodec) -> String {
        self.0.iter().map(|digit| codec.encode(*digit)).collect()
    }

    /// Sum of all digit values
    pub fn sum(&self) -> u32 {
        self.0.iter().map(|digit| u32::from(*digit)).sum()
    }

    fn split_point(&self, verification_length: usize) -> Result<usize, DocumentError> {
        self.0
            .len()
            .checked_sub(verification_length)
            .ok_or(DocumentError::OutOfRange {
                length: self.0.len(),
                required: verification_length,
            })
    }
}

/// Left-pads `text` with `'0'` up to `length` characters.
pub fn insert_leading_zeros(text: &str, length: usize) -> String {
    let missing = length.saturating_sub(text.chars().count());
    let mut padded = String::with_capacity(text.len() + missing);
    padded.extend(std::iter::repeat('0').take(missing));
    padded.push_str(text);
    padded
}

/// Truncates `text` to at most `length` characters, dropping from the end.
pub fn remove_trailing(text: &str, length: usize) -> &str {
    match text.char_indices().nth(length) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}
