// Copyright (c) 2022 Bastiaan Marinus van de Weerd


#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Color { Red, Green, Blue }

#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
struct Cubes { red: u64, green: u64, blue: u64 }

const LIMITS: Cubes = Cubes { red: 12, green: 13, blue: 14 };

impl std::ops::Index<Color> for Cubes {
	type Output = u64;
	fn index(&self, color: Color) -> &u64 {
		match color {
			Color::Red => &self.red,
			Color::Green => &self.green,
			Color::Blue => &self.blue,
		}
	}
}

impl std::ops::IndexMut<Color> for Cubes {
	fn index_mut(&mut self, color: Color) -> &mut u64 {
		match color {
			Color::Red => &mut self.red,
			Color::Green => &mut self.green,
			Color::Blue => &mut self.blue,
		}
	}
}

impl Cubes {
	/// `None` when the product does not fit a `u64`.
	fn power(&self) -> Option<u64> {
		self.red.checked_mul(self.green)?.checked_mul(self.blue)
	}
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
struct Clause { count: u64, color: Color }

#[derive(Debug)]
struct Round(Vec<Clause>);

#[derive(Debug)]
struct Game { id: u64, rounds: Vec<Round> }

impl Game {
	fn clauses(&self) -> impl Iterator<Item = &Clause> + '_ {
		self.rounds.iter().flat_map(|round| round.0.iter())
	}

	/// Each clause on its own must stay within its color's limit.
	fn is_possible(&self, limits: &Cubes) -> bool {
		self.clauses().all(|clause| clause.count <= limits[clause.color])
	}

	fn minimum_set(&self) -> Cubes {
		self.clauses().fold(Cubes::default(), |mut max, clause| {
			max[clause.color] = max[clause.color].max(clause.count);
			max
		})
	}
}


fn input_total(name: &str, total_impl: fn(&str) -> Result<u64, parsing::GamesError>)
-> anyhow::Result<u64> {
	use anyhow::Context as _;
	let input = crate::util::input(name)?;
	let total = total_impl(&input)
		.with_context(|| format!("bad game record {name}"))?;
	log::info!("{name}: {total}");
	Ok(total)
}


fn part1_impl(input: &str) -> Result<u64, parsing::GamesError> {
	parsing::games_from_str(input)?.try_fold(0, |sum: u64, game| {
		let (line, game) = game?;
		if !game.is_possible(&LIMITS) { return Ok(sum) }
		sum.checked_add(game.id).ok_or(parsing::GamesError::Overflow { line })
	})
}

pub(crate) fn part1() -> anyhow::Result<u64> {
	input_total("day2-part1.txt", part1_impl)
}


fn part2_impl(input: &str) -> Result<u64, parsing::GamesError> {
	parsing::games_from_str(input)?.try_fold(0, |sum: u64, game| {
		let (line, game) = game?;
		game.minimum_set().power()
			.and_then(|power| sum.checked_add(power))
			.ok_or(parsing::GamesError::Overflow { line })
	})
}

pub(crate) fn part2() -> anyhow::Result<u64> {
	input_total("day2-part1.txt", part2_impl)
}


mod parsing {
	use {std::{num::ParseIntError, str::FromStr}, regex::Regex};
	use super::{Clause, Color, Game, Round};

	#[derive(Debug, thiserror::Error)]
	pub(super) enum GameError {
		#[error("missing `:` after the game id")]
		Colon,
		#[error("expected `Game <id>`, found {0:?}")]
		Id(String),
		#[error("expected `<count> <color>`, found {0:?}")]
		Clause(String),
		#[error("number out of range")]
		Number(#[source] ParseIntError),
		#[error("unknown color {0:?}")]
		Color(String),
	}

	impl FromStr for Color {
		type Err = GameError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			match s {
				"red" => Ok(Color::Red),
				"green" => Ok(Color::Green),
				"blue" => Ok(Color::Blue),
				other => Err(GameError::Color(other.to_owned())),
			}
		}
	}

	pub(super) struct GameParser {
		id: Regex,
		clause: Regex,
	}

	impl GameParser {
		pub(super) fn new() -> Result<Self, regex::Error> {
			Ok(GameParser {
				id: Regex::new(r"^Game\s+([0-9]+)$")?,
				clause: Regex::new(r"^([0-9]+)\s+(\w+)$")?,
			})
		}

		fn clause(&self, s: &str) -> Result<Clause, GameError> {
			let s = s.trim();
			let captures = self.clause.captures(s)
				.ok_or_else(|| GameError::Clause(s.to_owned()))?;
			let count = captures[1].parse::<u64>().map_err(GameError::Number)?;
			let color = captures[2].parse::<Color>()?;
			log::trace!("{count} {color:?}");
			Ok(Clause { count, color })
		}

		fn round(&self, s: &str) -> Result<Round, GameError> {
			s.split(',')
				.map(|clause| self.clause(clause))
				.collect::<Result<Vec<_>, _>>()
				.map(Round)
		}

		pub(super) fn game(&self, s: &str) -> Result<Game, GameError> {
			let (id, rounds) = s.split_once(':').ok_or(GameError::Colon)?;
			let id = id.trim();
			let captures = self.id.captures(id)
				.ok_or_else(|| GameError::Id(id.to_owned()))?;
			let id = captures[1].parse::<u64>().map_err(GameError::Number)?;
			let rounds = rounds.split(';')
				.map(|round| self.round(round))
				.collect::<Result<Vec<_>, _>>()?;
			log::debug!("game {id}: {} round(s)", rounds.len());
			Ok(Game { id, rounds })
		}
	}

	#[derive(Debug, thiserror::Error)]
	pub(super) enum GamesError {
		#[error("invalid game pattern")]
		Pattern(#[from] regex::Error),
		#[error("line {line}: {source}")]
		Game { line: usize, source: GameError },
		#[error("line {line}: total does not fit a 64-bit integer")]
		Overflow { line: usize },
	}

	/// Games of the non-empty lines of `s`, with their 1-based line numbers.
	pub(super) fn games_from_str(s: &str)
	-> Result<impl Iterator<Item = Result<(usize, Game), GamesError>> + '_, GamesError> {
		let parser = GameParser::new()?;
		Ok(s.lines()
			.enumerate()
			.filter(|(_, line)| !line.is_empty())
			.map(move |(l, line)| match parser.game(line) {
				Ok(game) => Ok((l + 1, game)),
				Err(source) => Err(GamesError::Game { line: l + 1, source }),
			}))
	}
}
