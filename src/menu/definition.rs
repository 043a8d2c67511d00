//! Declarative menu definitions.
//!
//! A menu is written as nested [`MenuItem`]s and handed to
//! [`MenuTree::build`](super::MenuTree::build), which derives every node id
//! from its selector path.

use crate::models::Topic;

/// One entry in a menu definition.
#[derive(Debug, Clone)]
pub enum MenuItem {
    Branch {
        label: String,
        prompt: String,
        children: Vec<(char, MenuItem)>,
    },
    Leaf {
        label: String,
        topic: Topic,
    },
}

pub fn branch(
    label: impl Into<String>,
    prompt: impl Into<String>,
    children: Vec<(char, MenuItem)>,
) -> MenuItem {
    MenuItem::Branch {
        label: label.into(),
        prompt: prompt.into(),
        children,
    }
}

pub fn leaf(label: impl Into<String>, topic: Topic) -> MenuItem {
    MenuItem::Leaf {
        label: label.into(),
        topic,
    }
}

/// The reference FieldLine menu.
pub fn builtin_menu() -> MenuItem {
    branch(
        "FieldLine",
        "Welcome to FieldLine",
        vec![
            (
                '1',
                branch(
                    "Agriculture Info",
                    "Agriculture Info",
                    vec![
                        ('1', leaf("Weather Forecast", Topic::Weather)),
                        ('2', leaf("Market Prices", Topic::Prices)),
                        ('3', leaf("Farming Tips", Topic::Farming)),
                    ],
                ),
            ),
            (
                '2',
                branch(
                    "Trade & Border",
                    "Trade & Border",
                    vec![
                        ('1', leaf("Border Status", Topic::Border)),
                        ('2', leaf("Required Documents", Topic::Documents)),
                    ],
                ),
            ),
            (
                '3',
                branch(
                    "Travel & Routes",
                    "Travel & Routes",
                    vec![
                        ('1', leaf("Route Conditions", Topic::Routes)),
                        ('2', leaf("Border Crossing Hours", Topic::Border)),
                    ],
                ),
            ),
            (
                '4',
                branch(
                    "Culture & Language",
                    "Culture & Language",
                    vec![
                        ('1', leaf("Cultural Tips", Topic::Culture)),
                        (
                            '2',
                            branch(
                                "Basic Phrases",
                                "Choose a language",
                                vec![
                                    ('1', leaf("Swahili", Topic::PhrasesSwahili)),
                                    ('2', leaf("Luganda", Topic::PhrasesLuganda)),
                                ],
                            ),
                        ),
                    ],
                ),
            ),
            ('5', leaf("Emergency Contacts", Topic::Emergency)),
            ('0', leaf("Exit", Topic::Goodbye)),
        ],
    )
}
