//! End-to-end game rules through the public API.

use rand::SeedableRng;
use rand::rngs::StdRng;
use word_scramble::core::{ErrorKind, LetterPool, Outcome, Round, ScoreReset};
use word_scramble::engine::{Session, evaluate};
use word_scramble::wordlists::RoundSource;

const DATA: &str = "\
alphabet:bat,tab,table,plate,alpha
cat:act
planets:planet,plane,plans,pan
";

fn reason(round: &Round, raw: &str) -> Option<ErrorKind> {
    evaluate(round, raw).and_then(|o| o.reason())
}

#[test]
fn alphabet_examples() {
    let round = Round::new("alphabet", ["bat"]);

    assert_eq!(
        evaluate(&round, "bat"),
        Some(Outcome::Accepted {
            word: "bat".to_string(),
            score_delta: 3
        })
    );
    // "alphabet" has two 'a's: "aa" is spellable but too short, "aaa" is not spellable
    assert_eq!(reason(&round, "aa"), Some(ErrorKind::TooShort));
    assert_eq!(reason(&round, "aaa"), Some(ErrorKind::NotDerivable));

    let planets = Round::new("planets", ["plane"]);
    assert_eq!(reason(&planets, "aa"), Some(ErrorKind::NotDerivable));
}

#[test]
fn cat_is_same_as_root() {
    let round = Round::new("cat", ["act"]);
    assert_eq!(reason(&round, "cat"), Some(ErrorKind::SameAsRoot));
}

#[test]
fn blank_submissions_are_noops() {
    let mut round = Round::new("cat", ["act"]);
    for raw in ["", "   ", "\n"] {
        assert_eq!(evaluate(&round, raw), None);
    }
    round.apply(&evaluate(&round, "act").unwrap());
    assert_eq!(evaluate(&round, " "), None);
    // "act" uses every letter of "cat" and scores double
    assert_eq!(round.score(), 6);
}

#[test]
fn words_outside_root_multiset_are_not_derivable() {
    let round = Round::new("planets", ["plane"]);
    for word in ["apple", "planetss", "xyz", "tent", "passe"] {
        assert!(!LetterPool::can_spell("planets", word), "{word}");
        assert_eq!(reason(&round, word), Some(ErrorKind::NotDerivable), "{word}");
    }
}

#[test]
fn repeated_rejection_gives_same_reason() {
    let mut round = Round::new("alphabet", ["bat"]);
    for raw in ["bet", "zz", "at", "alphabet"] {
        let first = evaluate(&round, raw).unwrap();
        round.apply(&first);
        let second = evaluate(&round, raw).unwrap();
        round.apply(&second);
        assert_eq!(first.reason(), second.reason(), "{raw}");
    }
    assert_eq!(round.score(), -8);
    assert_eq!(round.found_words(), 0);
}

#[test]
fn accepted_word_resubmitted_is_duplicate() {
    let mut round = Round::new("alphabet", ["table"]);
    round.apply(&evaluate(&round, "table").unwrap());

    for raw in ["table", "TABLE", "  table "] {
        assert_eq!(reason(&round, raw), Some(ErrorKind::DuplicateWord));
    }
}

#[test]
fn score_doubles_for_full_length_words() {
    let round = Round::new("planets", ["planet", "plates", "pan"]);
    assert_eq!(evaluate(&round, "planet").unwrap().score_delta(), 6);
    assert_eq!(evaluate(&round, "pan").unwrap().score_delta(), 3);

    let round = Round::new("silent", ["listen"]);
    assert_eq!(evaluate(&round, "listen").unwrap().score_delta(), 12);
}

#[test]
fn every_rejection_costs_exactly_one() {
    let mut round = Round::new("alphabet", ["bat"]);
    round.apply(&evaluate(&round, "bat").unwrap());

    let cases = [
        ("bat", ErrorKind::DuplicateWord),
        ("zebra", ErrorKind::NotDerivable),
        ("ab", ErrorKind::TooShort),
        ("alphabet", ErrorKind::SameAsRoot),
        ("tab", ErrorKind::NotRecognized),
    ];
    for (raw, kind) in cases {
        let outcome = evaluate(&round, raw).unwrap();
        assert_eq!(outcome.reason(), Some(kind), "{raw}");
        assert_eq!(outcome.score_delta(), -1, "{raw}");
    }
}

#[test]
fn seeded_sessions_pick_the_same_roots() {
    let source = RoundSource::parse(DATA).unwrap();
    let mut a = Session::with_rng(source.clone(), StdRng::seed_from_u64(99));
    let mut b = Session::with_rng(source, StdRng::seed_from_u64(99));

    for _ in 0..5 {
        assert_eq!(a.round().root_word(), b.round().root_word());
        a.next_word();
        b.next_word();
    }
}

#[test]
fn full_session_flow() {
    let source = RoundSource::parse("alphabet:bat,tab,table,plate,alpha").unwrap();
    let mut session = Session::with_rng(source, StdRng::seed_from_u64(5));
    assert_eq!(session.round().root_word(), "alphabet");

    session.submit("Table");
    session.submit("bat");
    session.submit("bat");
    session.submit("");

    let round = session.round();
    assert_eq!(round.score(), 5 + 3 - 1);
    assert_eq!(round.found_words(), 2);
    assert_eq!(round.used_words().collect::<Vec<_>>(), vec!["bat", "table"]);
    assert!(!round.is_used("alphabet"));

    session.next_word();
    assert_eq!(session.round().score(), 7);
    assert_eq!(session.round().found_words(), 0);

    let previous = session.restart(ScoreReset::Immediate);
    assert_eq!(previous, 7);
    assert_eq!(session.round().score(), 0);
    assert_eq!(session.round().used_words().len(), 0);
}

#[test]
fn deferred_restart_survives_next_word() {
    let source = RoundSource::parse(DATA).unwrap();
    let mut session = Session::with_rng(source, StdRng::seed_from_u64(9));
    session.restart(ScoreReset::Immediate);
    session.submit("zzz");
    let before = session.round().score();

    assert_eq!(session.restart(ScoreReset::Deferred), before);
    session.next_word();
    session.next_word();
    assert_eq!(session.round().score(), before);
    assert!(session.round().score_reset_pending());

    assert!(session.settle_score_reset());
    assert_eq!(session.round().score(), 0);
}

#[test]
fn thread_rng_session_starts_fresh() {
    let source = RoundSource::parse(DATA).unwrap();
    let session = Session::new(source);
    assert!(["alphabet", "cat", "planets"].contains(&session.round().root_word()));
    assert_eq!(session.round().score(), 0);
}

#[test]
fn unreadable_data_is_an_error() {
    assert!(RoundSource::load_from_file("no/such/words.txt").is_err());
    assert!(RoundSource::parse("").is_err());
}
