use std::collections::HashMap;
use std::io::BufRead;
use std::process::exit;

use itertools::Itertools;
use regex_stress::oracle::Matcher;

// Re-judge a generated corpus read from stdin and flag every line whose
// recorded verdict the engine disagrees with.
fn main() {
    env_logger::init();

    let stdin = std::io::stdin();
    let mut matchers: HashMap<String, Matcher> = HashMap::new();
    let mut checked = 0usize;
    let mut bad = 0usize;

    for line in stdin.lock().lines() {
        let line = line.unwrap();
        let fields = line.splitn(3, ' ').collect_vec();
        if fields.len() != 3 || fields[0] != "0" && fields[0] != "1" {
            eprintln!("malformed line: {}", line);
            bad += 1;
            continue;
        }
        let (verdict, pattern, word) = (fields[0] == "1", fields[1], fields[2]);

        if !matchers.contains_key(pattern) {
            match Matcher::compile(pattern) {
                Ok(m) => {
                    matchers.insert(pattern.to_string(), m);
                }
                Err(e) => {
                    eprintln!("{}", e);
                    bad += 1;
                    continue;
                }
            }
        }

        checked += 1;
        if matchers[pattern].full_match(word) != verdict {
            println!("disagree: {}", line);
            bad += 1;
        }
    }

    println!("checked: {} disagreements: {}", checked, bad);
    if bad > 0 {
        exit(1);
    }
}
