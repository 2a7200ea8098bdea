use super::{LevelTemplate, ProblemTemplate};

pub(crate) const CLASSIC_LEVELS: [LevelTemplate; 5] = [
    LevelTemplate {
        level: 1,
        description: "Level 1: 1 operation, max 2 premises",
        problems: &[
            ProblemTemplate {
                premises: &["P → Q", "P"],
                conclusion: "Q",
                expected_operations: 1,
                description: "Modus Ponens",
                solution: "Apply Modus Ponens: from \"P → Q\" and \"P\", conclude \"Q\".",
            },
            ProblemTemplate {
                premises: &["P ∧ Q"],
                conclusion: "P",
                expected_operations: 1,
                description: "Simplification (left)",
                solution: "Apply Simplification to extract the left conjunct \"P\" from \"P ∧ Q\".",
            },
            ProblemTemplate {
                premises: &["P → Q", "¬Q"],
                conclusion: "¬P",
                expected_operations: 1,
                description: "Modus Tollens",
                solution: "Apply Modus Tollens: from \"P → Q\" and \"¬Q\", conclude \"¬P\".",
            },
            ProblemTemplate {
                premises: &["P ∨ Q", "¬P"],
                conclusion: "Q",
                expected_operations: 1,
                description: "Disjunctive Syllogism",
                solution: "Apply Disjunctive Syllogism: from \"P ∨ Q\" and \"¬P\", conclude \"Q\".",
            },
            ProblemTemplate {
                premises: &["¬¬P"],
                conclusion: "P",
                expected_operations: 1,
                description: "Double Negation",
                solution: "Apply Double Negation elimination to remove \"¬¬\" and get \"P\".",
            },
            ProblemTemplate {
                premises: &["P", "Q"],
                conclusion: "P ∧ Q",
                expected_operations: 1,
                description: "Conjunction",
                solution: "Apply Conjunction to combine \"P\" and \"Q\" into \"P ∧ Q\".",
            },
            ProblemTemplate {
                premises: &["R ∧ S"],
                conclusion: "S",
                expected_operations: 1,
                description: "Simplification (right)",
                solution: "Apply Simplification to extract the right conjunct \"S\" from \"R ∧ S\".",
            },
            ProblemTemplate {
                premises: &["¬(P ∧ Q)"],
                conclusion: "¬P ∨ ¬Q",
                expected_operations: 1,
                description: "De Morgan's Law (AND)",
                solution: "Apply De Morgan's Law to transform \"¬(P ∧ Q)\" into \"¬P ∨ ¬Q\".",
            },
            ProblemTemplate {
                premises: &["¬(P ∨ Q)"],
                conclusion: "¬P ∧ ¬Q",
                expected_operations: 1,
                description: "De Morgan's Law (OR)",
                solution: "Apply De Morgan's Law to transform \"¬(P ∨ Q)\" into \"¬P ∧ ¬Q\".",
            },
            ProblemTemplate {
                premises: &["Q ∨ R", "¬Q"],
                conclusion: "R",
                expected_operations: 1,
                description: "Disjunctive Syllogism (variant)",
                solution: "Apply Disjunctive Syllogism: from \"Q ∨ R\" and \"¬Q\", conclude \"R\".",
            },
        ],
    },
    LevelTemplate {
        level: 2,
        description: "Level 2: 2 operations, 2-3 premises",
        problems: &[
            ProblemTemplate {
                premises: &["P → Q", "Q → R", "P"],
                conclusion: "R",
                expected_operations: 2,
                description: "Hypothetical Syllogism + MP",
                solution: "Apply Hypothetical Syllogism to get \"P → R\" from the first two premises, then Modus Ponens with \"P\" to get \"R\".",
            },
            ProblemTemplate {
                premises: &["P ∧ Q", "R"],
                conclusion: "P ∧ R",
                expected_operations: 2,
                description: "Simplification + Conjunction",
                solution: "Apply Simplification to extract \"P\" from \"P ∧ Q\", then Conjunction to combine \"P\" and \"R\".",
            },
            ProblemTemplate {
                premises: &["¬¬P", "P → Q"],
                conclusion: "Q",
                expected_operations: 2,
                description: "Double Negation + Modus Ponens",
                solution: "Apply Double Negation to get \"P\" from \"¬¬P\", then Modus Ponens with \"P → Q\" to get \"Q\".",
            },
            ProblemTemplate {
                premises: &["P ∨ Q", "¬P", "Q → R"],
                conclusion: "R",
                expected_operations: 2,
                description: "Disjunctive Syllogism + MP",
                solution: "Apply Disjunctive Syllogism to get \"Q\" from \"P ∨ Q\" and \"¬P\", then Modus Ponens with \"Q → R\" to get \"R\".",
            },
            ProblemTemplate {
                premises: &["P ∧ (Q ∧ R)"],
                conclusion: "Q ∧ R",
                expected_operations: 2,
                description: "Simplification + Simplification",
                solution: "Apply Simplification twice: first to extract \"Q ∧ R\" from the outer conjunction, then you already have the result.",
            },
            ProblemTemplate {
                premises: &["¬(P ∨ Q)", "R → S"],
                conclusion: "¬P ∧ ¬Q",
                expected_operations: 2,
                description: "De Morgan's + ignore unused premise",
                solution: "Apply De Morgan's Law to \"¬(P ∨ Q)\" to get \"¬P ∧ ¬Q\". The premise \"R → S\" is not needed.",
            },
            ProblemTemplate {
                premises: &["P", "Q", "R"],
                conclusion: "(P ∧ Q) ∧ R",
                expected_operations: 2,
                description: "Conjunction + Conjunction",
                solution: "Apply Conjunction to combine \"P\" and \"Q\" into \"P ∧ Q\", then apply Conjunction again with \"R\".",
            },
            ProblemTemplate {
                premises: &["P → (Q ∧ R)", "P"],
                conclusion: "Q",
                expected_operations: 2,
                description: "Modus Ponens + Simplification",
                solution: "Apply Modus Ponens to get \"Q ∧ R\", then Simplification to extract \"Q\".",
            },
            ProblemTemplate {
                premises: &["(P ∧ Q) → R", "P", "Q"],
                conclusion: "R",
                expected_operations: 2,
                description: "Conjunction + Modus Ponens",
                solution: "Apply Conjunction to combine \"P\" and \"Q\" into \"P ∧ Q\", then Modus Ponens to get \"R\".",
            },
            ProblemTemplate {
                premises: &["P ∨ (Q ∧ R)", "¬P"],
                conclusion: "Q ∧ R",
                expected_operations: 2,
                description: "Disjunctive Syllogism + identity",
                solution: "Apply Disjunctive Syllogism: from \"P ∨ (Q ∧ R)\" and \"¬P\", conclude \"Q ∧ R\".",
            },
        ],
    },
    LevelTemplate {
        level: 3,
        description: "Level 3: 3 operations, 3-4 premises",
        problems: &[
            ProblemTemplate {
                premises: &["P → Q", "Q → R", "R → S", "P"],
                conclusion: "S",
                expected_operations: 3,
                description: "Chain of Hypothetical Syllogisms",
                solution: "Apply Hypothetical Syllogism twice to build \"P → S\", then Modus Ponens with \"P\" to get \"S\".",
            },
            ProblemTemplate {
                premises: &["P ∧ Q", "R ∧ S"],
                conclusion: "P ∧ R",
                expected_operations: 3,
                description: "Multiple Simplifications + Conjunction",
                solution: "Apply Simplification to extract \"P\" from \"P ∧ Q\" and \"R\" from \"R ∧ S\", then Conjunction to combine them.",
            },
            ProblemTemplate {
                premises: &["¬¬(P ∨ Q)", "¬P", "Q → R"],
                conclusion: "R",
                expected_operations: 3,
                description: "Double Neg + Disj Syll + MP",
                solution: "Apply Double Negation to get \"P ∨ Q\", then Disjunctive Syllogism with \"¬P\" to get \"Q\", finally Modus Ponens to get \"R\".",
            },
            ProblemTemplate {
                premises: &["(P ∧ Q) → R", "¬R", "P"],
                conclusion: "¬Q",
                expected_operations: 3,
                description: "Modus Tollens + De Morgan's + Disj Syll",
                solution: "Apply Modus Tollens to get \"¬(P ∧ Q)\", then De Morgan's to get \"¬P ∨ ¬Q\", finally Disjunctive Syllogism with \"P\" to get \"¬Q\".",
            },
            ProblemTemplate {
                premises: &["P ∨ (Q ∧ R)", "¬P"],
                conclusion: "Q",
                expected_operations: 3,
                description: "Disjunctive Syllogism + Simplification",
                solution: "Apply Disjunctive Syllogism to get \"Q ∧ R\", then Simplification to extract \"Q\".",
            },
            ProblemTemplate {
                premises: &["¬(P ∧ Q)", "R → P", "R"],
                conclusion: "¬Q",
                expected_operations: 3,
                description: "MP + De Morgan's + Disj Syll",
                solution: "Apply Modus Ponens to get \"P\", then De Morgan's on \"¬(P ∧ Q)\" to get \"¬P ∨ ¬Q\", finally Disjunctive Syllogism to get \"¬Q\".",
            },
            ProblemTemplate {
                premises: &["P", "Q", "R", "S"],
                conclusion: "((P ∧ Q) ∧ R) ∧ S",
                expected_operations: 3,
                description: "Chain of Conjunctions",
                solution: "Apply Conjunction three times: combine \"P\" and \"Q\", then combine with \"R\", finally combine with \"S\".",
            },
            ProblemTemplate {
                premises: &["P → (Q ∨ R)", "P", "¬Q"],
                conclusion: "R",
                expected_operations: 3,
                description: "MP + Disjunctive Syllogism",
                solution: "Apply Modus Ponens to get \"Q ∨ R\", then Disjunctive Syllogism with \"¬Q\" to get \"R\".",
            },
            ProblemTemplate {
                premises: &["¬¬P ∧ ¬¬Q"],
                conclusion: "P ∧ Q",
                expected_operations: 3,
                description: "Simplification + Double Neg + Conjunction",
                solution: "Apply Simplification to get \"¬¬P\" and \"¬¬Q\", then Double Negation on each to get \"P\" and \"Q\", finally Conjunction.",
            },
            ProblemTemplate {
                premises: &["(P ∨ Q) ∧ R", "¬P"],
                conclusion: "Q ∧ R",
                expected_operations: 3,
                description: "Simplification + Disj Syll + Conjunction",
                solution: "Apply Simplification to get \"P ∨ Q\" and \"R\", then Disjunctive Syllogism to get \"Q\", finally Conjunction with \"R\".",
            },
        ],
    },
    LevelTemplate {
        level: 4,
        description: "Level 4: 3-4 operations, 4-5 premises",
        problems: &[
            ProblemTemplate {
                premises: &["P → Q", "Q → (R ∧ S)", "R → T", "P"],
                conclusion: "T",
                expected_operations: 4,
                description: "Complex chain with branching",
                solution: "Chain the implications: Modus Ponens to get \"Q\", then \"R ∧ S\", extract \"R\" via Simplification, then Modus Ponens to get \"T\".",
            },
            ProblemTemplate {
                premises: &["¬(P ∨ Q)", "R ∧ S"],
                conclusion: "¬P ∧ S",
                expected_operations: 4,
                description: "De Morgan's + Simplification + Conjunction",
                solution: "Apply De Morgan's to get \"¬P ∧ ¬Q\", extract \"¬P\", extract \"S\" from \"R ∧ S\", then combine with Conjunction.",
            },
            ProblemTemplate {
                premises: &["P ∨ (Q ∧ R)", "¬P", "S ∨ T", "¬S"],
                conclusion: "Q ∧ T",
                expected_operations: 4,
                description: "Multiple Disjunctive Syllogisms",
                solution: "Apply Disjunctive Syllogism twice: get \"Q ∧ R\" and \"T\", then extract \"Q\" and combine with \"T\" via Conjunction.",
            },
            ProblemTemplate {
                premises: &["(P ∧ Q) → (R ∨ S)", "P", "Q", "¬R"],
                conclusion: "S",
                expected_operations: 4,
                description: "Conjunction + MP + Disj Syll",
                solution: "Combine \"P\" and \"Q\" via Conjunction, apply Modus Ponens to get \"R ∨ S\", then Disjunctive Syllogism with \"¬R\" to get \"S\".",
            },
            ProblemTemplate {
                premises: &["¬¬(P → Q)", "¬¬P", "Q → (R ∧ S)"],
                conclusion: "R",
                expected_operations: 4,
                description: "Double Neg + MP + MP + Simplification",
                solution: "Apply Double Negation twice to get \"P → Q\" and \"P\", then chain Modus Ponens to get \"R ∧ S\", finally extract \"R\".",
            },
            ProblemTemplate {
                premises: &["P ∨ Q", "¬P", "Q → R", "R → S", "S → T"],
                conclusion: "T",
                expected_operations: 4,
                description: "Disj Syll + Chain of MPs",
                solution: "Get \"Q\" via Disjunctive Syllogism, then chain Modus Ponens through \"R\", \"S\", to \"T\".",
            },
            ProblemTemplate {
                premises: &["P → Q", "Q → R", "¬R", "P"],
                conclusion: "⊥",
                expected_operations: 4,
                description: "Contradiction via MT",
                solution: "Chain the implications to get \"P → R\", use Modus Tollens with \"¬R\" to get \"¬P\", which contradicts \"P\".",
            },
            ProblemTemplate {
                premises: &["(P ∨ Q) ∧ (R ∨ S)", "¬P", "¬R"],
                conclusion: "Q ∧ S",
                expected_operations: 4,
                description: "Multiple simplifications + syllogisms",
                solution: "Extract \"P ∨ Q\" and \"R ∨ S\" via Simplification, then apply Disjunctive Syllogism twice to get \"Q\" and \"S\", combine via Conjunction.",
            },
            ProblemTemplate {
                premises: &["P → (Q → R)", "P", "Q", "R → S"],
                conclusion: "S",
                expected_operations: 4,
                description: "Nested implications + chain",
                solution: "Apply Modus Ponens to get \"Q → R\", then Modus Ponens with \"Q\" to get \"R\", finally Modus Ponens with \"R → S\" to get \"S\".",
            },
            ProblemTemplate {
                premises: &["¬(P ∨ Q) ∧ ¬(R ∨ S)"],
                conclusion: "¬P ∧ ¬R",
                expected_operations: 4,
                description: "Complex De Morgan's + Simplifications",
                solution: "Apply Simplification to separate conjuncts, then De Morgan's on each to get \"¬P ∧ ¬Q\" and \"¬R ∧ ¬S\", extract \"¬P\" and \"¬R\", combine via Conjunction.",
            },
        ],
    },
    LevelTemplate {
        level: 5,
        description: "Level 5: 4+ operations, 4-6 premises",
        problems: &[
            ProblemTemplate {
                premises: &["P → (Q ∧ R)", "Q → S", "R → T", "P"],
                conclusion: "S ∧ T",
                expected_operations: 5,
                description: "Complex branching chain",
                solution: "Apply Modus Ponens to get \"Q ∧ R\", extract \"Q\" and \"R\", apply Modus Ponens to each to get \"S\" and \"T\", combine via Conjunction.",
            },
            ProblemTemplate {
                premises: &["(P ∨ Q) → R", "P", "¬R"],
                conclusion: "⊥",
                expected_operations: 5,
                description: "Simple contradiction",
                solution: "Use Addition to get \"P ∨ Q\" from \"P\", apply Modus Ponens to get \"R\", which contradicts \"¬R\".",
            },
            ProblemTemplate {
                premises: &["(P ∧ Q) → (R ∨ S)", "(R ∨ S) → T", "P", "Q"],
                conclusion: "T",
                expected_operations: 5,
                description: "Chain of implications",
                solution: "Combine \"P\" and \"Q\", apply Modus Ponens to get \"R ∨ S\", then Modus Ponens again to get \"T\".",
            },
            ProblemTemplate {
                premises: &["P ∨ Q", "¬P ∨ R", "¬Q ∨ R"],
                conclusion: "R",
                expected_operations: 5,
                description: "Resolution-style proof",
                solution: "Apply Resolution techniques: from the three disjunctions, deduce that \"R\" must be true through case analysis.",
            },
            ProblemTemplate {
                premises: &["(P → Q) ∧ (R → S)", "¬Q ∨ ¬S", "P ∨ R"],
                conclusion: "¬P ∨ ¬R",
                expected_operations: 5,
                description: "Complex Modus Tollens",
                solution: "Extract the implications, use De Morgan's logic with \"¬Q ∨ ¬S\" to derive that at least one antecedent must be false.",
            },
            ProblemTemplate {
                premises: &["P ↔ Q", "Q → (R ∧ S)", "R → T", "S → T", "P"],
                conclusion: "T",
                expected_operations: 5,
                description: "Biconditional elimination + convergence",
                solution: "Use Biconditional to get \"Q\", apply Modus Ponens to get \"R ∧ S\", extract either \"R\" or \"S\", then Modus Ponens to get \"T\".",
            },
            ProblemTemplate {
                premises: &["¬¬(P ∧ Q)", "P → R", "Q → S"],
                conclusion: "R ∧ S",
                expected_operations: 5,
                description: "Double negation + parallel inference",
                solution: "Apply Double Negation to get \"P ∧ Q\", extract \"P\" and \"Q\", apply Modus Ponens to each to get \"R\" and \"S\", combine via Conjunction.",
            },
            ProblemTemplate {
                premises: &["P → Q", "R → S", "(Q ∧ S) → T", "P", "R"],
                conclusion: "T",
                expected_operations: 5,
                description: "Convergent proof",
                solution: "Apply Modus Ponens twice to get \"Q\" and \"S\", combine via Conjunction, then Modus Ponens to get \"T\".",
            },
            ProblemTemplate {
                premises: &["(P ∨ Q) → (R ∧ S)", "P", "¬R → T", "¬T"],
                conclusion: "R ∧ S",
                expected_operations: 5,
                description: "Proof by contradiction",
                solution: "Use Addition to get \"P ∨ Q\", apply Modus Ponens to get \"R ∧ S\". The premises about \"T\" help verify \"R\" must be true.",
            },
            ProblemTemplate {
                premises: &["P ⊕ Q", "P → R", "Q → R"],
                conclusion: "R",
                expected_operations: 5,
                description: "XOR elimination to common conclusion",
                solution: "XOR means exactly one of \"P\" or \"Q\" is true. Either way, both lead to \"R\" via Modus Ponens, so \"R\" must be true.",
            },
        ],
    },
];
