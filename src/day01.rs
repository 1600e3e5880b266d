// Copyright (c) 2022 Bastiaan Marinus van de Weerd


const NUMBER_WORDS: [(&str, u8); 9] = [
	("one", 1),
	("two", 2),
	("three", 3),
	("four", 4),
	("five", 5),
	("six", 6),
	("seven", 7),
	("eight", 8),
	("nine", 9),
];

#[derive(Clone, Copy, Debug)]
enum Alphabet { Digits, DigitsAndWords }

impl Alphabet {
	/// The digit whose token starts at the very beginning of `rest`, if any.
	fn token_at(self, rest: &[u8]) -> Option<u8> {
		match rest.first().copied() {
			Some(b @ b'0'..=b'9') => return Some(b - b'0'),
			None => return None,
			Some(_) => (),
		}
		if let Alphabet::Digits = self { return None }
		NUMBER_WORDS.iter()
			.find(|(word, _)| rest.starts_with(word.as_bytes()))
			.map(|&(_, digit)| digit)
	}

	/// Tokens of `line` in order. Every byte offset is tried on its own, so
	/// words sharing letters (`"twone"`) each produce a token.
	fn tokens(self, line: &str) -> impl Iterator<Item = u8> + '_ {
		let bytes = line.as_bytes();
		(0..bytes.len()).filter_map(move |i| {
			let digit = self.token_at(&bytes[i..])?;
			log::trace!("{line:?}@{i}: {digit}");
			Some(digit)
		})
	}
}


fn calibration_value(mut tokens: impl Iterator<Item = u8>) -> Option<u64> {
	let first = tokens.next()?;
	let last = tokens.last().unwrap_or(first);
	Some(u64::from(first) * 10 + u64::from(last))
}

fn sum_calibration_values(s: &str, alphabet: Alphabet) -> Result<u64, parsing::CalibrationError> {
	use itertools::Itertools as _;
	parsing::calibration_values_from_str(s, alphabet)
		.fold_ok(0, |sum, value| sum + value)
}

fn input_sum(name: &str, sum_impl: fn(&str) -> Result<u64, parsing::CalibrationError>)
-> anyhow::Result<u64> {
	use anyhow::Context as _;
	let input = crate::util::input(name)?;
	let sum = sum_impl(&input)
		.with_context(|| format!("bad calibration document {name}"))?;
	log::info!("{name}: {sum}");
	Ok(sum)
}


fn part1_impl(input: &str) -> Result<u64, parsing::CalibrationError> {
	sum_calibration_values(input, Alphabet::Digits)
}

pub(crate) fn part1() -> anyhow::Result<u64> {
	input_sum("day1-part1.txt", part1_impl)
}


fn part2_impl(input: &str) -> Result<u64, parsing::CalibrationError> {
	sum_calibration_values(input, Alphabet::DigitsAndWords)
}

pub(crate) fn part2() -> anyhow::Result<u64> {
	input_sum("day1-part2.txt", part2_impl)
}


mod parsing {
	use super::{Alphabet, calibration_value};

	#[derive(Debug, thiserror::Error)]
	#[error("line {line}: no digit in {text:?}")]
	pub(super) struct CalibrationError {
		pub(super) line: usize,
		pub(super) text: String,
	}

	/// Calibration values of the non-empty lines of `s`.
	pub(super) fn calibration_values_from_str(s: &str, alphabet: Alphabet)
	-> impl Iterator<Item = Result<u64, CalibrationError>> + '_ {
		s.lines()
			.enumerate()
			.filter(|(_, line)| !line.is_empty())
			.map(move |(l, line)| match calibration_value(alphabet.tokens(line)) {
				Some(value) => {
					log::debug!("line {}: {value}", l + 1);
					Ok(value)
				}
				None => Err(CalibrationError { line: l + 1, text: line.to_owned() }),
			})
	}
}


#[cfg(test)]
mod tests {
	use test_case::test_case;
	use super::*;

	const INPUT1: &str = indoc::indoc! { "
		1abc2
		pqr3stu8vwx
		a1b2c3d4e5f
		treb7uchet
	" };

	const INPUT2: &str = indoc::indoc! { "
		two1nine
		eightwothree
		abcone2threexyz
		xtwone3four
		4nineeightseven2
		zoneight234
		7pqrstsixteen
	" };

	#[test_case("1abc2" => Some(12))]
	#[test_case("pqr3stu8vwx" => Some(38))]
	#[test_case("a1b2c3d4e5f" => Some(15))]
	#[test_case("treb7uchet" => Some(77) ; "single digit counts twice")]
	#[test_case("two1nine" => Some(11) ; "words are not digits")]
	#[test_case("a0b" => Some(0) ; "zero digit")]
	#[test_case("trebuchet" => None ; "no digit")]
	fn digits(line: &str) -> Option<u64> {
		calibration_value(Alphabet::Digits.tokens(line))
	}

	#[test_case("two1nine" => Some(29))]
	#[test_case("eightwothree" => Some(83))]
	#[test_case("abcone2threexyz" => Some(13))]
	#[test_case("xtwone3four" => Some(24))]
	#[test_case("4nineeightseven2" => Some(42))]
	#[test_case("zoneight234" => Some(14))]
	#[test_case("7pqrstsixteen" => Some(76))]
	#[test_case("twone" => Some(21) ; "overlapping words")]
	#[test_case("seven" => Some(77) ; "single word counts twice")]
	#[test_case("zero" => None ; "zero is not a word")]
	fn digits_and_words(line: &str) -> Option<u64> {
		calibration_value(Alphabet::DigitsAndWords.tokens(line))
	}

	#[test]
	fn overlapping_tokens() {
		let tokens = |line: &str| Alphabet::DigitsAndWords.tokens(line).collect::<Vec<_>>();
		assert_eq!(tokens("twone"), [2, 1]);
		assert_eq!(tokens("eighthreesevenine"), [8, 3, 7, 9]);
		assert_eq!(tokens("x1oneight"), [1, 1, 8]);
		assert_eq!(Alphabet::Digits.tokens("x1oneight").collect::<Vec<_>>(), [1]);
	}

	#[test]
	fn blank_lines_and_crlf() {
		assert_eq!(part1_impl("1abc2\r\n\r\ntreb7uchet\r\n\r\n").unwrap(), 89);
		assert_eq!(part1_impl("").unwrap(), 0);
	}

	#[test]
	fn missing_digit() {
		let err = part1_impl("1abc2\nabc\n").unwrap_err();
		assert_eq!((err.line, err.text.as_str()), (2, "abc"));
		assert_eq!(err.to_string(), r#"line 2: no digit in "abc""#);
		assert!(part2_impl("one\nzero\n").is_err());
	}

	#[test]
	fn part1() {
		assert_eq!(part1_impl(INPUT1).unwrap(), 142);
		assert_eq!(part1_impl(INPUT1).unwrap(), part1_impl(INPUT1).unwrap());
		assert_eq!(super::part1().unwrap(), 142);
		assert_eq!(super::part1().unwrap(), super::part1().unwrap());
	}

	#[test]
	fn part2() {
		assert_eq!(part2_impl(INPUT2).unwrap(), 281);
		assert_eq!(part2_impl(INPUT1).unwrap(), 142);
		assert_eq!(super::part2().unwrap(), 281);
	}
}
