//! Well-formedness checks for generated text, used by the unit tests.

/// Walk `text` and return the deepest brace nesting.
///
/// Fails on unbalanced braces, commas outside of braces, empty
/// alternatives and groups with fewer than two alternatives.
pub fn check_eds(text: &str) -> Result<usize, String> {
    let mut groups: Vec<usize> = Vec::new(); // alternatives per open group
    let mut max_depth = 0;
    let mut prev: Option<char> = None;

    for (i, c) in text.chars().enumerate() {
        match c {
            '{' => {
                groups.push(1);
                max_depth = max_depth.max(groups.len());
            }
            ',' | '}' => {
                if matches!(prev, Some('{') | Some(',')) {
                    return Err(format!("empty alternative at position {}", i));
                }
                let Some(count) = groups.last_mut() else {
                    return Err(format!("unmatched '{}' at position {}", c, i));
                };
                if c == ',' {
                    *count += 1;
                } else {
                    if *count < 2 {
                        return Err(format!("group closed at {} has {} alternative", i, count));
                    }
                    groups.pop();
                }
            }
            _ => (),
        }
        prev = Some(c);
    }
    if !groups.is_empty() {
        return Err(format!("{} unclosed group(s)", groups.len()));
    }
    Ok(max_depth)
}

/// Number of alternatives in every group, in order of the opening brace.
pub fn group_sizes(text: &str) -> Vec<usize> {
    let mut sizes = Vec::new();
    let mut open: Vec<usize> = Vec::new(); // indices into sizes
    for c in text.chars() {
        match c {
            '{' => {
                open.push(sizes.len());
                sizes.push(1);
            }
            ',' => {
                if let Some(&i) = open.last() {
                    sizes[i] += 1;
                }
            }
            '}' => {
                open.pop();
            }
            _ => (),
        }
    }
    sizes
}

#[test]
fn test_check_eds() {
    assert_eq!(check_eds("ACGT"), Ok(0));
    assert_eq!(check_eds("A{C,G}T"), Ok(1));
    assert_eq!(check_eds("{A{C,G},T}"), Ok(2));
    assert!(check_eds("{A}").is_err());
    assert!(check_eds("{A,}").is_err());
    assert!(check_eds("{,A}").is_err());
    assert!(check_eds("A,C").is_err());
    assert!(check_eds("{A,C").is_err());
    assert!(check_eds("A,C}").is_err());
    assert_eq!(group_sizes("{A{C,G,T},T}"), vec![2, 3]);
}
