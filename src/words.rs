use itertools::Itertools;

/// The three letters every pattern literal and candidate word is drawn from.
pub const ALPHABET: [char; 3] = ['a', 'b', 'c'];

pub const MAX_WORD_LEN: usize = 6;

/// Decode `index` as a base-3 numeral of exactly `len` digits, least
/// significant digit first, one alphabet letter per digit.
pub fn index_word(len: usize, mut index: usize) -> String {
    let mut word = String::with_capacity(len);
    for _ in 0..len {
        word.push(ALPHABET[index % ALPHABET.len()]);
        index /= ALPHABET.len();
    }
    word
}

/// Every word over the alphabet of length 0..=max_len, shortest lengths first.
pub fn enumerate_words(max_len: usize) -> Vec<String> {
    (0..=max_len)
        .flat_map(|len| {
            (0..ALPHABET.len().pow(len as u32)).map(move |index| index_word(len, index))
        })
        .collect_vec()
}

#[test]
fn every_word_of_each_length_appears_once() {
    let words = enumerate_words(4);
    assert_eq!(words.len(), 1 + 3 + 9 + 27 + 81);
    assert_eq!(words.iter().unique().count(), words.len());
    for len in 0..=4 {
        let of_len = words.iter().filter(|w| w.len() == len).count();
        assert_eq!(of_len, 3usize.pow(len as u32));
    }
}

#[test]
fn digits_decode_least_significant_first() {
    assert_eq!(index_word(0, 0), "");
    assert_eq!(index_word(1, 2), "c");
    assert_eq!(index_word(3, 0), "aaa");
    assert_eq!(index_word(3, 1), "baa");
    assert_eq!(index_word(3, 5), "cba");
    assert_eq!(index_word(3, 26), "ccc");
}

#[test]
fn words_are_grouped_by_length() {
    let words = enumerate_words(3);
    let lengths = words.iter().map(|w| w.len()).collect_vec();
    let mut sorted = lengths.clone();
    sorted.sort();
    assert_eq!(lengths, sorted);
    assert_eq!(&words[..5], &["", "a", "b", "c", "aa"]);
}
