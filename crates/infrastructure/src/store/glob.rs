/// Shell-style glob match over the whole of `text`.
///
/// Supports `*` (any run, including empty), `?` (any single character),
/// `[...]` character classes with ranges and `[!...]`/`[^...]` negation, and
/// `\` to escape the next pattern character. An unclosed `[` matches a
/// literal `[`, as fnmatch does.
pub fn glob_match(pattern: &str, text: &str) -> bool {
    let pat: Vec<char> = pattern.chars().collect();
    let txt: Vec<char> = text.chars().collect();

    let (mut p, mut t) = (0usize, 0usize);
    // Position to resume from when a later literal mismatches: index after
    // the most recent '*' and the text index it has consumed up to.
    let mut star: Option<(usize, usize)> = None;

    while t < txt.len() {
        if p < pat.len() {
            match pat[p] {
                '*' => {
                    star = Some((p + 1, t));
                    p += 1;
                    continue;
                }
                '?' => {
                    p += 1;
                    t += 1;
                    continue;
                }
                '[' => match match_class(&pat, p, txt[t]) {
                    Some((true, next)) => {
                        p = next;
                        t += 1;
                        continue;
                    }
                    Some((false, _)) => {}
                    None => {
                        if txt[t] == '[' {
                            p += 1;
                            t += 1;
                            continue;
                        }
                    }
                },
                '\\' if p + 1 < pat.len() => {
                    if pat[p + 1] == txt[t] {
                        p += 2;
                        t += 1;
                        continue;
                    }
                }
                literal => {
                    if literal == txt[t] {
                        p += 1;
                        t += 1;
                        continue;
                    }
                }
            }
        }

        // Mismatch: let the last '*' swallow one more character, or fail.
        match star {
            Some((after_star, consumed)) => {
                p = after_star;
                t = consumed + 1;
                star = Some((after_star, consumed + 1));
            }
            None => return false,
        }
    }

    while p < pat.len() && pat[p] == '*' {
        p += 1;
    }
    p == pat.len()
}

/// Match `c` against the class opening at `pat[open] == '['`.
///
/// Returns `(matched, index past the closing ']')`, or `None` when the class
/// never closes. A `]` directly after the opening (or the negation marker)
/// is a literal member, not the terminator.
fn match_class(pat: &[char], open: usize, c: char) -> Option<(bool, usize)> {
    let mut i = open + 1;
    let mut negated = false;
    if i < pat.len() && (pat[i] == '!' || pat[i] == '^') {
        negated = true;
        i += 1;
    }

    let mut matched = false;
    let mut first = true;
    while i < pat.len() {
        if pat[i] == ']' && !first {
            return Some((matched != negated, i + 1));
        }
        first = false;

        if pat[i] == '\\' && i + 1 < pat.len() {
            i += 1;
            if pat[i] == c {
                matched = true;
            }
            i += 1;
        } else if i + 2 < pat.len() && pat[i + 1] == '-' && pat[i + 2] != ']' {
            if pat[i] <= c && c <= pat[i + 2] {
                matched = true;
            }
            i += 3;
        } else {
            if pat[i] == c {
                matched = true;
            }
            i += 1;
        }
    }
    None
}
