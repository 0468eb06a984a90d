use std::convert::Infallible;

use pretty_assertions::assert_eq;
use proptest::prelude::*;

use crate::traverse::{Rewrite, Visitor, traverse};
use crate::*;

fn t(s: &str) -> Turn {
    s.parse().unwrap()
}

fn turns(s: &str) -> Vec<Turn> {
    s.split_whitespace().map(t).collect()
}

fn ast(s: &str) -> Ast {
    parse_notation(s).unwrap()
}

fn parse_error(s: &str) -> String {
    parse(&lex(s).unwrap()).unwrap_err().to_string()
}

fn alg(s: &str) -> Algorithm {
    Algorithm::new(s).unwrap()
}

#[test]
fn test_lex() {
    let tokens = lex(" [R' U2 ,\n(x)12] ").unwrap();
    let kinds: Vec<TokenKind> = tokens.iter().map(|token| token.kind).collect();
    let values: Vec<&str> = tokens.iter().map(|token| token.value).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::BracketOpen,
            TokenKind::Turn,
            TokenKind::Turn,
            TokenKind::SeparatorCommutator,
            TokenKind::ParenthesisOpen,
            TokenKind::Turn,
            TokenKind::ParenthesisClose,
            TokenKind::Multiplier,
            TokenKind::BracketClose,
        ],
    );
    assert_eq!(values, vec!["[", "R'", "U2", ",", "(", "x", ")", "12", "]"]);

    assert_eq!(lex("").unwrap(), vec![]);
    assert_eq!(lex(" \t\n ").unwrap(), vec![]);
}

#[test]
fn test_lex_errors() {
    assert_eq!(
        lex("R U' F2 ? D").unwrap_err(),
        LexError {
            character: '?',
            position: 9,
        },
    );
    assert_eq!(
        lex("R U' F2 ? D").unwrap_err().to_string(),
        "Invalid character '?' at position 9.",
    );
    // Positions count characters, not bytes.
    assert_eq!(lex("R’ w").unwrap_err().position, 2);
    assert_eq!(lex("R2'").unwrap_err().character, '\'');
    assert_eq!(lex("X").unwrap_err().position, 1);
}

#[test]
fn test_parse() {
    let expected = Ast {
        body: NodeList(vec![
            Node::Sequence(turns("R U")),
            Node::conjugate(
                NodeList::from_turns(turns("F")),
                NodeList(vec![Node::commutator(
                    NodeList::from_turns(turns("R")),
                    NodeList(vec![Node::Repeating {
                        contents: NodeList::from_turns(turns("U D'")),
                        multiplier: 2,
                    }]),
                )]),
            ),
            Node::Sequence(turns("x2")),
        ]),
    };
    assert_eq!(parse(&lex("R U [F: [R, (U D')2]] x2").unwrap()), Ok(expected));

    assert_eq!(parse(&[]), Ok(Ast::default()));
}

#[test]
fn test_parse_huge_multiplier() {
    let parsed = parse(&lex("(R)99999999999").unwrap()).unwrap();
    assert_eq!(
        parsed.body[0],
        Node::Repeating {
            contents: NodeList::from_turns(turns("R")),
            multiplier: u32::MAX,
        },
    );
}

#[test]
fn test_parse_errors() {
    assert_eq!(parse_error("[ U"), "Unexpected end of input.");
    assert_eq!(parse_error("[ U : D"), "Unexpected end of input.");
    assert_eq!(parse_error("( U"), "Unexpected end of input.");
    assert_eq!(parse_error("U , D ]"), "Unexpected token , at position 2.");
    assert_eq!(parse_error("U ) 2"), "Unexpected token ) at position 2.");
    assert_eq!(parse_error("[ U D ]"), "Missing seperator : or , inside brackets.");
    assert_eq!(parse_error("[ : U ]"), "Left side of conjugate can't be empty.");
    assert_eq!(parse_error("[ U , ]"), "Right side of commutator can't be empty.");
    assert_eq!(parse_error("( ) 2"), "Repeating group can't be empty.");
    assert_eq!(
        parse_error("( U )"),
        "Repeating group must be followed by a multiplier.",
    );

    let e = parse(&lex("R [U, D").unwrap()).unwrap_err();
    assert_eq!(e.index, 5);
    assert_eq!(e.kind, ParseErrorKind::UnexpectedEndOfInput);
}

#[test]
fn test_parse_nested_error_aborts() {
    // The inner group fails, so the outer group is never retried as a
    // commutator.
    assert_eq!(parse_error("[R: [U, ]]"), "Right side of commutator can't be empty.");
    assert_eq!(parse_error("[R: (U)]"), "Repeating group must be followed by a multiplier.");
}

#[test]
fn test_generate() {
    let tree = Ast {
        body: NodeList(vec![
            Node::conjugate(
                NodeList::from_turns(turns("R2 u'")),
                NodeList(vec![Node::commutator(
                    NodeList::from_turns(turns("M")),
                    NodeList::from_turns(turns("E' S2")),
                )]),
            ),
            Node::Repeating {
                contents: NodeList::from_turns(turns("x y' z2")),
                multiplier: 3,
            },
        ]),
    };
    assert_eq!(generate(&tree), "[R2 u': [M, E' S2]] (x y' z2)3");
    assert_eq!(generate(&Ast::default()), "");
}

#[test]
fn test_turn_algebra() {
    assert_eq!(t("R").merge(t("R")), Merge::Merged(t("R2")));
    assert_eq!(t("R2").merge(t("R")), Merge::Merged(t("R'")));
    assert_eq!(t("R'").merge(t("R'")), Merge::Merged(t("R2")));
    assert_eq!(t("R").merge(t("R'")), Merge::Cancelled);
    assert_eq!(t("R2").merge(t("R2")), Merge::Cancelled);
    assert_eq!(t("R").merge(t("r")), Merge::Unmerged(t("R"), t("r")));

    assert_eq!(t("U'").repeat(2), Some(t("U2")));
    assert_eq!(t("U'").repeat(3), Some(t("U")));
    assert_eq!(t("U2").repeat(2), None);
    assert_eq!(t("U").repeat(0), None);
    assert_eq!(t("U").repeat(u32::MAX), Some(t("U'")));

    assert_eq!(t("M'").inv(), t("M"));
    assert_eq!(t("x2").inv(), t("x2"));

    assert!(t("U").is_parallel(t("d'")));
    assert!(t("E").is_parallel(t("D2")));
    assert!(t("M").is_parallel(t("r")));
    assert!(t("S").is_parallel(t("B")));
    assert!(!t("R").is_parallel(t("U")));
    assert!(!t("x").is_parallel(t("R")));
    assert!(!t("x").is_parallel(t("x")));
}

#[test]
fn test_turn_from_str() {
    assert_eq!(t("r2"), Turn::new(Move::Wide(Face::R), Direction::Double));
    assert_eq!(t("S'"), Turn::new(Move::Slice(Slice::S), Direction::Ccw));
    assert_eq!(t("y"), Turn::new(Move::Rotation(Axis::Y), Direction::Cw));
    "Q".parse::<Turn>().expect_err("bad letter");
    "R3".parse::<Turn>().expect_err("bad suffix");
    "".parse::<Turn>().expect_err("empty");
    "X".parse::<Turn>().expect_err("uppercase rotation");
}

#[test]
fn test_decompose() {
    let decompose = |s: &str| t(s).decompose().map(|ts| ts.to_vec());
    assert_eq!(decompose("u"), Some(turns("D y")));
    assert_eq!(decompose("d"), Some(turns("U y'")));
    assert_eq!(decompose("b'"), Some(turns("F' z")));
    assert_eq!(decompose("l2"), Some(turns("R2 x2")));
    assert_eq!(decompose("M"), Some(turns("R L' x'")));
    assert_eq!(decompose("E'"), Some(turns("U' D y")));
    assert_eq!(decompose("S"), Some(turns("F' B z")));
    assert_eq!(decompose("S2"), Some(turns("F2 B2 z2")));
    assert_eq!(decompose("R"), None);
    assert_eq!(decompose("x"), None);
}

#[test]
fn test_invert() {
    assert_eq!(invert(&ast("R U R' U'")).to_string(), "U R U' R'");
    assert_eq!(invert(&ast("[R U: D]")).to_string(), "[R U: D']");
    assert_eq!(invert(&ast("[R U, D]")).to_string(), "[D, R U]");
    assert_eq!(invert(&ast("(R U2)3 F")).to_string(), "F' (U2 R')3");
    assert_eq!(invert(&ast("")).to_string(), "");
}

#[test]
fn test_clean_sequences() {
    let clean = |s: &str| passes::clean(&ast(s)).to_string();

    assert_eq!(clean("M R2 r E d' R2"), "R2 r M d' E R2");
    assert_eq!(clean("R2 R' R2 U2 U' L L' R U U U"), "R' U R U'");
    assert_eq!(clean("R L R'"), "L");
    assert_eq!(clean("R U U' R'"), "");
    assert_eq!(clean("x y x'"), "x y x'");
    assert_eq!(clean("x x"), "x2");
}

#[test]
fn test_clean_groups() {
    let clean = |s: &str| passes::clean(&ast(s)).to_string();

    assert_eq!(clean("[U: [U, L E L']]"), "[U2: [L E L', U']]");
    assert_eq!(clean("[U': [U2, R D' R']]"), "[U: [R D' R', U2]]");
    assert_eq!(clean("[R2 D2: [D, R U' R']]"), "[R2 D': [R U' R', D']]");
    assert_eq!(clean("[D2: [D2, R U R']]"), "[D2: [D2, R U R']]");
    assert_eq!(clean("[U: [U', R]]"), "[U: [U', R]]");
    assert_eq!(clean("[F' D: [D', L2]]"), "[F' D: [D', L2]]");

    assert_eq!(clean("(R U)0 F"), "F");
    assert_eq!(clean("(R U)1 R"), "R U R");
    assert_eq!(clean("(R)3"), "R'");
    assert_eq!(clean("(R2)2 F"), "F");
    assert_eq!(clean("(R U)2"), "(R U)2");
    assert_eq!(clean("((R U)1)2"), "(R U)2");

    assert_eq!(clean("[R: (U)4]"), "");
    assert_eq!(clean("[(U)4: R] F"), "R F");
    assert_eq!(clean("[R, L2]"), "");
    assert_eq!(clean("[M, r' R]"), "");
    assert_eq!(clean("[R, U]"), "[R, U]");
}

#[test]
fn test_traversal_order() {
    #[derive(Default)]
    struct Recorder(Vec<&'static str>);
    impl Visitor for Recorder {
        type Error = Infallible;

        fn visit_turn(&mut self, turn: Turn) -> Result<Rewrite<Turn>, Infallible> {
            self.0.push("turn");
            Ok(Rewrite::Keep(turn))
        }
        fn visit_sequence(&mut self, turns: Vec<Turn>) -> Result<Rewrite<Node>, Infallible> {
            self.0.push("sequence");
            Ok(Rewrite::Keep(Node::Sequence(turns)))
        }
        fn visit_conjugate(
            &mut self,
            a: NodeList,
            b: NodeList,
        ) -> Result<Rewrite<Node>, Infallible> {
            self.0.push("conjugate");
            Ok(Rewrite::Keep(Node::conjugate(a, b)))
        }
        fn visit_commutator(
            &mut self,
            a: NodeList,
            b: NodeList,
        ) -> Result<Rewrite<Node>, Infallible> {
            self.0.push("commutator");
            Ok(Rewrite::Keep(Node::commutator(a, b)))
        }
        fn visit_repeating(
            &mut self,
            contents: NodeList,
            multiplier: u32,
        ) -> Result<Rewrite<Node>, Infallible> {
            self.0.push("repeating");
            Ok(Rewrite::Keep(Node::Repeating {
                contents,
                multiplier,
            }))
        }
        fn visit_algorithm(&mut self, body: NodeList) -> Result<Ast, Infallible> {
            self.0.push("algorithm");
            Ok(Ast { body })
        }
    }

    let input = ast("[z': [(R U R')2, D']]");
    let mut recorder = Recorder::default();
    let output = traverse(&input, &mut recorder).unwrap();
    assert_eq!(output, input);
    assert_eq!(
        recorder.0,
        vec![
            "turn",
            "sequence",
            "turn",
            "turn",
            "turn",
            "sequence",
            "repeating",
            "turn",
            "sequence",
            "commutator",
            "conjugate",
            "algorithm",
        ],
    );
}

#[test]
fn test_traverse_error() {
    let e = passes::validate(&ast("R (U (F)7)2"), 6).unwrap_err();
    assert_eq!(
        e,
        ValidationError::MultiplierTooLarge {
            multiplier: 7,
            max: 6,
        },
    );
    assert_eq!(e.to_string(), "Multiplier can't be higher than 6.");
    passes::validate(&ast("R (U (F)6)2"), 6).unwrap();
}

#[test]
fn test_rewrite_remove_and_replace() {
    /// Doubles every `R` and drops every rotation.
    struct Silly;
    impl Visitor for Silly {
        type Error = Infallible;

        fn visit_turn(&mut self, turn: Turn) -> Result<Rewrite<Turn>, Infallible> {
            Ok(match turn.mv {
                Move::Face(Face::R) => Rewrite::Replace(vec![turn, turn]),
                Move::Rotation(_) => Rewrite::Remove,
                _ => Rewrite::Keep(turn),
            })
        }
    }

    let output = traverse::rewrite(&ast("R x U [R: y]"), &mut Silly);
    assert_eq!(output.to_string(), "R R U [R R: ]");
}

#[test]
fn test_sequence() {
    let sequence = |s: &str| passes::sequence(&ast(s)).to_string();

    assert_eq!(sequence("[R U: D]"), "R U D U' R'");
    assert_eq!(sequence("[R U, D]"), "R U D U' R' D'");
    assert_eq!(sequence("(R U)3"), "R U R U R U");
    assert_eq!(sequence("[R: (U)2] F"), "R U U R' F");
    assert_eq!(sequence("(R)0"), "");
}

#[test]
fn test_rotationless() {
    let rotationless = |s: &str| passes::rotationless(&ast(s)).to_string();

    assert_eq!(rotationless("x U"), "F");
    assert_eq!(rotationless("y R y'"), "B");
    assert_eq!(rotationless("r U"), "L F");
    assert_eq!(rotationless("M2 U"), "R2 L2 D");
}

#[test]
fn test_orientation() {
    let mut orientation = Orientation::new();
    orientation.rotate(Axis::X, Direction::Cw);
    orientation.rotate(Axis::Z, Direction::Double);

    for (before, after) in [
        ("F", "D"),
        ("R'", "L'"),
        ("D2", "F2"),
        ("b", "u"),
        ("l'", "r'"),
        ("u2", "b2"),
        ("M", "M'"),
        ("M'", "M"),
        ("E", "S"),
        ("E2", "S2"),
        ("S'", "E'"),
        ("x", "x"),
    ] {
        assert_eq!(orientation.get_turn(t(before)), t(after), "{before}");
    }

    orientation.reset();
    assert!(orientation.is_identity());
    assert_eq!(orientation.get_turn(t("M")), t("M"));
}

#[test]
fn test_orientation_composition() {
    let mut orientation = Orientation::default();
    for s in ["x", "y2", "z'", "x'", "y2"] {
        let turn = t(s);
        let Move::Rotation(axis) = turn.mv else {
            panic!("not a rotation");
        };
        orientation.rotate(axis, turn.direction);
    }
    for (before, after) in [
        (Face::U, Face::D),
        (Face::F, Face::R),
        (Face::R, Face::F),
        (Face::D, Face::U),
        (Face::B, Face::L),
        (Face::L, Face::B),
    ] {
        assert_eq!(orientation.get_face(before), after);
    }
}

#[test]
fn test_normalize() {
    assert_eq!(normalize(" (Rw U)*2 (R2’ U’) "), "(r U)2 R2 U'");
    assert_eq!(normalize("R2' U'2 F′"), "R2 U2 F'");
    assert_eq!(normalize("Rw Uw' Fw2"), "r u' f2");
    assert_eq!(normalize("((R U))"), "R U");
    assert_eq!(normalize("(R)*3 (U)*2"), "(R)3 (U)2");
}

#[test]
fn test_algorithm_views() {
    assert_eq!(alg(" (Rw U)*2 (R2’ U’) ").clean(), "(r U)2 R2 U'");

    let a = alg("[r U r', D2]");
    assert_eq!(a.inverse(), "[D2, r U r']");
    assert_eq!(a.turns(), turns("r U r' D2 r U' r' D2"));

    assert_eq!(alg("[M': (U M' U M)2]").sequence(), "M' U M' U M U M' U M2");

    let a = alg("[S U' R': [E, R2]]");
    assert_eq!(a.sequence(), "S U' R' E R2 E' R' U S'");
    assert_eq!(a.rotationless(), "F' B L' U' R' L F2 R L' U' L F B'");

    assert_eq!(alg("r U R' U' r' F R F'").rotationless(), "L F R' F' L' F R F'");

    assert_eq!(alg("R U R' U'").inv().to_string(), "U R U' R'");
    assert_eq!(alg("").turns(), vec![]);
    assert_eq!(alg("R R'").sequence(), "");
    assert_eq!("[R, U]".parse::<Algorithm>().unwrap().raw(), "[R, U]");
}

#[test]
fn test_algorithm_errors() {
    let longest = "R U ".repeat(16);
    assert_eq!(longest.chars().count(), 64);
    assert_eq!(Algorithm::new(&longest).unwrap().turns().len(), 32);
    assert_eq!(
        Algorithm::new(&format!("{longest}F")).unwrap_err(),
        AlgorithmError::TooLong {
            length: 65,
            max: 64,
        },
    );

    let most_turns = "(R U F D B L)6 (R U F D B L)4 R U F D";
    assert_eq!(Algorithm::new(most_turns).unwrap().turns().len(), 64);
    assert_eq!(
        Algorithm::new(&format!("{most_turns} B")).unwrap_err(),
        AlgorithmError::TooManyTurns { turns: 65, max: 64 },
    );

    let too_long = "R U ".repeat(17);
    assert_eq!(
        Algorithm::new(&too_long).unwrap_err(),
        AlgorithmError::TooLong {
            length: 68,
            max: 64,
        },
    );
    Algorithm::with_limits(&too_long, Limits::UNLIMITED).unwrap();

    assert_eq!(
        Algorithm::new("(R U F D B L)6 (R U F D B L)6").unwrap_err(),
        AlgorithmError::TooManyTurns { turns: 72, max: 64 },
    );
    assert_eq!(
        Algorithm::new("((((((R U)6)6)6)6)6)6").unwrap_err(),
        AlgorithmError::TooManyTurns {
            turns: 93312,
            max: 4096,
        },
    );

    assert_eq!(
        Algorithm::new("(R)7").unwrap_err().to_string(),
        "Multiplier can't be higher than 6.",
    );
    assert!(matches!(
        Algorithm::new("R U ? D"),
        Err(AlgorithmError::Lex(LexError { character: '?', .. })),
    ));
    assert!(matches!(
        Algorithm::new("[R U]"),
        Err(AlgorithmError::Parse(ParseError {
            kind: ParseErrorKind::MissingSeparator,
            ..
        })),
    ));
}

/// Joins adjacent sequences so that the list prints the way it parses.
fn join_sequences(nodes: Vec<Node>) -> NodeList {
    let mut ret: Vec<Node> = vec![];
    for node in nodes {
        if let Node::Sequence(turns) = &node
            && let Some(Node::Sequence(prev)) = ret.last_mut()
        {
            prev.extend_from_slice(turns);
            continue;
        }
        ret.push(node);
    }
    NodeList(ret)
}

impl Arbitrary for Ast {
    type Parameters = ();

    fn arbitrary_with((): Self::Parameters) -> Self::Strategy {
        let leaf_node = prop::collection::vec(Turn::arbitrary(), 1..6).prop_map(Node::Sequence);

        let node = leaf_node.prop_recursive(
            3,  // 3 levels deep
            24, // max size of 24 nodes
            4,  // 4 items per collection
            |inner| {
                let node_list = prop::collection::vec(inner, 1..4).prop_map(join_sequences);
                prop_oneof![
                    (BinaryGroupKind::arbitrary(), [node_list.clone(), node_list.clone()])
                        .prop_map(|(kind, contents)| Node::BinaryGroup { kind, contents }),
                    (node_list, 0..=6_u32).prop_map(|(contents, multiplier)| {
                        Node::Repeating {
                            contents,
                            multiplier,
                        }
                    }),
                ]
            },
        );

        prop::collection::vec(node, 0..4)
            .prop_map(join_sequences)
            .prop_map(Ast::from)
            .boxed()
    }

    type Strategy = BoxedStrategy<Self>;
}

proptest! {
    #[test]
    fn proptest_notation_roundtrip(tree: Ast) {
        assert_eq!(parse_notation(&tree.to_string()), Ok(tree));
    }

    #[test]
    fn proptest_double_inverse(tree: Ast) {
        assert_eq!(tree.inv().inv(), tree);
    }

    #[test]
    fn proptest_clean_idempotent(tree: Ast) {
        let once = passes::clean(&tree);
        assert_eq!(passes::clean(&once), once);
    }

    #[test]
    fn proptest_clean_output_parses(tree: Ast) {
        let cleaned = passes::clean(&tree);
        assert_eq!(parse_notation(&cleaned.to_string()), Ok(cleaned));
    }

    #[test]
    fn proptest_sequence_is_flat(tree: Ast) {
        let seq = passes::sequence(&tree);
        assert_eq!(seq.body.len(), 1);
        let flat = seq.flat_turns().unwrap();
        assert_eq!(flat.len(), tree.expanded_turn_count());
    }

    #[test]
    fn proptest_rotationless_has_only_face_turns(tree: Ast) {
        let turns = passes::rotationless(&tree).flat_turns().unwrap();
        assert!(turns.iter().all(|turn| matches!(turn.mv, Move::Face(_))));
    }
}
