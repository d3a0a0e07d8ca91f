use nom::{
    character::complete::{char, digit1},
    combinator::{all_consuming, map_res},
    sequence::separated_pair,
    IResult,
};

fn number(input: &str) -> IResult<&str, u32> {
    map_res(digit1, str::parse::<u32>)(input)
}

/// Matches a whole `<chapter>:<verse>` token. Chapter and verse values are
/// not range-checked.
pub fn verse_marker(input: &str) -> IResult<&str, (u32, u32)> {
    all_consuming(separated_pair(number, char(':'), number))(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markers() {
        assert_eq!(verse_marker("1:1").map(|(_, m)| m), Ok((1, 1)));
        assert_eq!(verse_marker("16:27").map(|(_, m)| m), Ok((16, 27)));
        assert_eq!(verse_marker("0:0").map(|(_, m)| m), Ok((0, 0)));
        assert!(verse_marker("1:1:1").is_err());
        assert!(verse_marker("a:1").is_err());
        assert!(verse_marker("").is_err());
    }
}
