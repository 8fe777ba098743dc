use crate::{CubicBezier, ElementKind, GridGuide, LayoutElement, Point, Size};

use super::{KerningLevel, LayoutLevel, ShapeLevel};

const fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn shape(id: u32, name: &str, instruction: &str, curve: [Point; 4]) -> ShapeLevel {
    let [p0, p1, p2, p3] = curve;
    ShapeLevel {
        id,
        name: name.into(),
        instruction: instruction.into(),
        curve: CubicBezier::new(p0, p1, p2, p3),
    }
}

pub(super) fn shape_levels() -> Vec<ShapeLevel> {
    vec![
        shape(
            1,
            "Basic Arch",
            "Level 1/5: Bend a simple arch.",
            [p(100.0, 300.0), p(100.0, 100.0), p(500.0, 100.0), p(500.0, 300.0)],
        ),
        shape(
            2,
            "Sine Wave",
            "Level 2/5: Shape an S-shaped wave.",
            [p(100.0, 200.0), p(300.0, 50.0), p(300.0, 350.0), p(500.0, 200.0)],
        ),
        shape(
            3,
            "Wide Corner",
            "Level 3/5: Make a wide, rounded corner.",
            [p(50.0, 350.0), p(50.0, 50.0), p(550.0, 50.0), p(550.0, 350.0)],
        ),
        shape(
            4,
            "Teardrop",
            "Level 4/5: An asymmetric, teardrop-like bulge.",
            [p(300.0, 50.0), p(50.0, 200.0), p(550.0, 200.0), p(300.0, 350.0)],
        ),
        shape(
            5,
            "Fish Hook",
            "Level 5/5: A sharp, precise hook.",
            [p(200.0, 350.0), p(200.0, 50.0), p(500.0, 50.0), p(400.0, 250.0)],
        ),
    ]
}

fn kerning(
    id: u32,
    word: &str,
    font_family: &str,
    instruction: &str,
    ideal_gaps: &[i32],
) -> KerningLevel {
    KerningLevel {
        id,
        word: word.into(),
        font_family: font_family.into(),
        instruction: instruction.into(),
        ideal_gaps: ideal_gaps.to_vec(),
    }
}

pub(super) fn kerning_levels() -> Vec<KerningLevel> {
    vec![
        kerning(
            1,
            "AVA",
            "serif",
            "Move the 'V' so it sits evenly between both 'A's.",
            &[-15, -15],
        ),
        kerning(
            2,
            "TYPE",
            "sans-serif",
            "Adjust the T-Y, Y-P and P-E spacing.",
            &[-5, 2, 5],
        ),
        kerning(
            3,
            "WAVE",
            "Arial",
            "Mind the diagonals of 'W', 'A' and 'V'. Tighten them up.",
            &[-8, -8, 2],
        ),
        kerning(
            4,
            "LYRA",
            "Times New Roman",
            "'L' and 'Y' leave a lot of open space. Compensate for it.",
            &[-10, 2, 0],
        ),
        kerning(
            5,
            "AVATAR",
            "sans-serif",
            "Final challenge: make the visual rhythm consistent.",
            &[-15, -10, -5, -10, -5],
        ),
    ]
}

fn element(
    id: &str,
    kind: ElementKind,
    label: Option<&str>,
    size: Size,
    start: Point,
    target: Point,
) -> LayoutElement {
    LayoutElement {
        id: id.into(),
        kind,
        label: label.map(Into::into),
        size,
        start,
        target,
    }
}

pub(super) fn layout_levels() -> Vec<LayoutLevel> {
    vec![
        LayoutLevel {
            id: 1,
            name: "Visual Center".into(),
            instruction: "Move the box to the visual center (slightly above the mathematical center)."
                .into(),
            grid: GridGuide::Center,
            elements: vec![element(
                "1",
                ElementKind::Box,
                None,
                Size::square(100.0),
                p(20.0, 20.0),
                p(125.0, 115.0),
            )],
        },
        LayoutLevel {
            id: 2,
            name: "Rule of Thirds".into(),
            instruction: "Put the focal point on the upper-right intersection of the thirds grid."
                .into(),
            grid: GridGuide::Thirds,
            elements: vec![element(
                "1",
                ElementKind::Box,
                Some("Focus"),
                Size::square(80.0),
                p(135.0, 135.0),
                p(210.0, 60.0),
            )],
        },
        LayoutLevel {
            id: 3,
            name: "Left Alignment".into(),
            instruction: "Align the heading and the paragraph neatly on the left.".into(),
            grid: GridGuide::Columns,
            elements: vec![
                element(
                    "1",
                    ElementKind::Text,
                    Some("Heading"),
                    Size::new(150.0, 40.0),
                    p(150.0, 50.0),
                    p(40.0, 50.0),
                ),
                element(
                    "2",
                    ElementKind::Text,
                    Some("Paragraph"),
                    Size::new(200.0, 80.0),
                    p(20.0, 150.0),
                    p(40.0, 100.0),
                ),
            ],
        },
        LayoutLevel {
            id: 4,
            name: "Proximity".into(),
            instruction: "Group the icon with its label, away from unrelated space.".into(),
            grid: GridGuide::None,
            elements: vec![
                element(
                    "1",
                    ElementKind::Box,
                    Some("Icon"),
                    Size::square(50.0),
                    p(280.0, 280.0),
                    p(50.0, 100.0),
                ),
                element(
                    "2",
                    ElementKind::Text,
                    Some("Label"),
                    Size::new(80.0, 30.0),
                    p(20.0, 20.0),
                    p(50.0, 160.0),
                ),
            ],
        },
        LayoutLevel {
            id: 5,
            name: "Symmetry".into(),
            instruction: "Build a symmetric composition: balance the second box against the first."
                .into(),
            grid: GridGuide::Center,
            elements: vec![
                // already in place; moving it only costs points
                element(
                    "1",
                    ElementKind::Box,
                    None,
                    Size::square(80.0),
                    p(50.0, 135.0),
                    p(50.0, 135.0),
                ),
                element(
                    "2",
                    ElementKind::Box,
                    None,
                    Size::square(80.0),
                    p(135.0, 20.0),
                    p(220.0, 135.0),
                ),
            ],
        },
    ]
}
