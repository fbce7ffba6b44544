//! Signature (shorty) decoding
//!
//! A shorty is one type code per argument, e.g. `"ILZ"` for
//! `(int, Object, boolean)`. Full method descriptors such as
//! `(I[BLjava/lang/String;)V` can be reduced to a shorty with
//! [`from_descriptor`].

use dvm_proxy_sdk::{BridgeError, BridgeResult, TypeCode};

/// Parse a shorty into its type codes.
///
/// Fails on the first character outside the alphabet; nothing is skipped.
pub fn parse(signature: &str) -> BridgeResult<Vec<TypeCode>> {
    let mut codes = Vec::with_capacity(signature.len());
    for (position, c) in signature.chars().enumerate() {
        let code = TypeCode::from_char(c).ok_or_else(|| malformed(signature, position, c))?;
        codes.push(code);
    }
    Ok(codes)
}

/// Render type codes back into a shorty string
pub fn render(codes: &[TypeCode]) -> String {
    codes.iter().map(|c| c.as_char()).collect()
}

/// Reduce a method descriptor to the shorty of its parameters.
///
/// Class types and arrays both collapse to `L`. The return type is
/// validated but dropped.
pub fn from_descriptor(descriptor: &str) -> BridgeResult<String> {
    let chars: Vec<char> = descriptor.chars().collect();
    let at = |i: usize| chars.get(i).copied();

    match at(0) {
        Some('(') => {}
        Some(c) => return Err(malformed(descriptor, 0, c)),
        None => return Err(malformed(descriptor, 0, '\0')),
    }

    let mut codes = Vec::new();
    let mut pos = 1;
    loop {
        match at(pos) {
            Some(')') => {
                pos += 1;
                break;
            }
            Some(_) => {
                let (code, next) = descriptor_type(descriptor, &chars, pos)?;
                codes.push(code);
                pos = next;
            }
            None => return Err(malformed(descriptor, pos, '\0')),
        }
    }

    // Return type: `V` or exactly one field type.
    let end = match at(pos) {
        Some('V') => pos + 1,
        Some(_) => descriptor_type(descriptor, &chars, pos)?.1,
        None => return Err(malformed(descriptor, pos, '\0')),
    };
    if let Some(c) = at(end) {
        return Err(malformed(descriptor, end, c));
    }

    Ok(render(&codes))
}

/// Decode one field type starting at `pos`; returns its code and the index
/// just past it.
fn descriptor_type(
    descriptor: &str,
    chars: &[char],
    pos: usize,
) -> BridgeResult<(TypeCode, usize)> {
    let mut i = pos;
    let mut is_array = false;
    while chars.get(i) == Some(&'[') {
        is_array = true;
        i += 1;
    }

    let code = match chars.get(i) {
        Some('L') => {
            let close = chars[i..]
                .iter()
                .position(|&c| c == ';')
                .ok_or_else(|| malformed(descriptor, i, 'L'))?;
            // `L;` names no class
            if close == 1 {
                return Err(malformed(descriptor, i + 1, ';'));
            }
            i += close;
            TypeCode::Object
        }
        Some(&c) => TypeCode::from_char(c).ok_or_else(|| malformed(descriptor, i, c))?,
        None => return Err(malformed(descriptor, i, '\0')),
    };

    let code = if is_array { TypeCode::Object } else { code };
    Ok((code, i + 1))
}

fn malformed(signature: &str, position: usize, code: char) -> BridgeError {
    BridgeError::MalformedSignature {
        signature: signature.to_string(),
        position,
        code,
    }
}
