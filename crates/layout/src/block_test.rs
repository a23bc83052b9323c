use crate::test_utils::{assert_all_width, init_logger};
use crate::{Alignment, BlockBuilder, BlockStyle, Glyph, LayoutError, Render, Size};

#[test]
fn test_single_body_row() {
    init_logger();
    let block = BlockBuilder::new().with_text('#', ["Texty"]).unwrap().finish().unwrap();
    assert_eq!(block.lines(), ["#######", "#Texty#", "#######"]);
    assert_eq!(block.size(), Size::new(7, 3));
}

#[test]
fn test_multiple_body_rows_align_to_widest() {
    let block = BlockBuilder::new()
        .with_text('#', ["Texty", "T", "Antidisestablishmentarianism"])
        .unwrap()
        .finish()
        .unwrap();
    let lines = block.lines();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[1], format!("#Texty{}#", " ".repeat(23)));
    assert_eq!(lines[2], format!("#T{}#", " ".repeat(27)));
    assert_eq!(lines[3], "#Antidisestablishmentarianism#");
    assert_all_width(lines, 30);
}

#[test]
fn test_padding_surrounds_body() {
    let block = BlockBuilder::new()
        .with_text('#', ["Texty"])
        .unwrap()
        .with_padding(2, 1)
        .finish()
        .unwrap();
    assert_eq!(
        block.lines(),
        [
            "###########",
            "#         #",
            "#  Texty  #",
            "#         #",
            "###########",
        ]
    );
}

#[test]
fn test_title_is_centered_with_odd_remainder_at_end() {
    let block = BlockBuilder::new()
        .with_text('#', ["Antidisestablishmentarianism"])
        .unwrap()
        .add_title(["Title"])
        .finish()
        .unwrap();
    let expected_title = format!("{} Title {}", "~".repeat(11), "~".repeat(12));
    assert_eq!(block.title(), [expected_title.clone()]);
    assert_eq!(block.lines()[0], expected_title);
    assert_all_width(block.lines(), 30);
}

#[test]
fn test_title_wider_than_body_widens_the_body() {
    let block = BlockBuilder::from_lines(["ab"])
        .with_title('=', ["Long title"])
        .unwrap()
        .finish()
        .unwrap();
    assert_eq!(
        block.lines(),
        [" Long title ", "************", "*ab        *", "************"]
    );
}

#[test]
fn test_caption_follows_the_bottom_border() {
    let block = BlockBuilder::new()
        .with_text('#', ["Texty"])
        .unwrap()
        .add_caption(["Caption"])
        .finish()
        .unwrap();
    assert_eq!(
        block.lines(),
        ["#########", "#Texty  #", "#########", "Caption"]
    );
    assert_eq!(block.caption(), ["Caption"]);
    assert_eq!(block.body(), ["#Texty  #"]);
}

#[test]
fn test_empty_body_has_no_border() {
    let block = BlockBuilder::new().add_title(["T"]).finish().unwrap();
    assert_eq!(block.lines(), [" T "]);
    assert!(block.body().is_empty());
}

#[test]
fn test_explicit_size_stretches_body() {
    let block = BlockBuilder::from_lines(["ab"])
        .with_total_size(3, 4)
        .unwrap()
        .finish()
        .unwrap();
    assert_eq!(
        block.lines(),
        ["******", "*ab  *", "*    *", "*    *", "******"]
    );
}

#[test]
fn test_style_and_alignment() {
    let style = BlockStyle {
        border: Glyph::new('+').unwrap(),
        title_pad: Glyph::new('-').unwrap(),
    };
    let block = BlockBuilder::from_lines(["a", "abc"])
        .with_style(style)
        .with_alignment(Alignment::Center)
        .add_title(["t"])
        .finish()
        .unwrap();
    assert_eq!(block.lines(), ["- t -", "+++++", "+ a +", "+abc+", "+++++"]);
}

#[test]
fn test_rejects_empty_and_invalid_input() {
    assert!(matches!(BlockBuilder::new().finish(), Err(LayoutError::Empty("block"))));
    assert!(matches!(
        BlockBuilder::new().with_border('\n'),
        Err(LayoutError::InvalidArgument(_))
    ));
    assert!(matches!(
        BlockBuilder::new().with_title('\t', ["x"]),
        Err(LayoutError::InvalidArgument(_))
    ));
    let overflow = BlockBuilder::from_lines(["abc", "d"])
        .with_total_size(1, 3)
        .unwrap()
        .finish();
    assert!(matches!(
        overflow,
        Err(LayoutError::ContentOverflow { what: "cell height", .. })
    ));
}

#[test]
fn test_wide_title_does_not_hide_undersized_body() {
    let undersized = BlockBuilder::from_lines(["abcdef"]).with_total_size(1, 2).unwrap();
    assert!(matches!(
        undersized.finish(),
        Err(LayoutError::ContentOverflow { required: 6, supplied: 2, .. })
    ));

    let titled = undersized.add_title(["a long title"]).finish();
    assert!(matches!(
        titled,
        Err(LayoutError::ContentOverflow {
            what: "cell width",
            required: 6,
            supplied: 2
        })
    ));
}

#[test]
fn test_finish_is_idempotent() {
    let builder = BlockBuilder::from_lines(["body"]).add_title(["t"]).add_caption(["c"]);
    assert_eq!(builder.finish().unwrap(), builder.finish().unwrap());
}
