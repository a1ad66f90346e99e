// Crossword XML export: document structure and emphasis handling

use crossword_wasm::text::Paragraph;
use crossword_wasm::{transcription_to_xml, ConversionSettings};
use roxmltree::{Document, Node};

const PUZZLE_NS: &str = "http://crossword.info/xml/rectangular-puzzle";

fn square() -> Vec<Paragraph> {
    vec![
        Paragraph::plain("Square & Fair"),
        Paragraph::plain("Setter"),
        Paragraph::plain("© 2024 Setter"),
        Paragraph::plain("C A T"),
        Paragraph::plain("A R E"),
        Paragraph::plain("B E D"),
        Paragraph::plain("1A\tCAT\tPet"),
        Paragraph::plain("4A\tARE\tExist"),
        // "1 & <2> 3" with chars [2, 5) italic
        Paragraph::with_emphasis("5A\tBED\t1 & <2> 3", vec![9..12]),
        Paragraph::plain("1D\tCAB\tTaxi"),
        Paragraph::plain("2D\tARE\tAlso exist"),
        Paragraph::plain("3D\tTED\tName"),
    ]
}

fn export() -> String {
    transcription_to_xml(&square(), &ConversionSettings::default()).expect("export should succeed")
}

fn elements<'a, 'i>(doc: &'a Document<'i>, name: &'a str) -> impl Iterator<Item = Node<'a, 'i>> + 'a {
    doc.descendants()
        .filter(move |n| n.is_element() && n.tag_name().name() == name)
}

#[test]
fn test_xml_is_well_formed_with_namespaces() {
    let xml = export();
    let doc = Document::parse(&xml).expect("well-formed XML");

    let root = doc.root_element();
    assert_eq!(root.tag_name().name(), "crossword-compiler-applet");

    let puzzle = elements(&doc, "rectangular-puzzle").next().unwrap();
    assert_eq!(puzzle.tag_name().namespace(), Some(PUZZLE_NS));
    assert_eq!(puzzle.attribute("alphabet"), Some("ABCDEFGHIJKLMNOPQRSTUVWXYZ"));
}

#[test]
fn test_metadata() {
    let xml = export();
    let doc = Document::parse(&xml).unwrap();

    let text = |name: &str| elements(&doc, name).next().and_then(|n| n.text()).map(str::to_string);
    assert_eq!(text("creator").as_deref(), Some("Setter"));
    assert_eq!(text("title").as_deref(), Some("Square & Fair"));
    assert_eq!(text("copyright").as_deref(), Some("2024 Setter"));
}

#[test]
fn test_grid_cells_and_numbers() {
    let xml = export();
    let doc = Document::parse(&xml).unwrap();

    let grid = elements(&doc, "grid").next().unwrap();
    assert_eq!(grid.attribute("width"), Some("3"));
    assert_eq!(grid.attribute("height"), Some("3"));

    let cells: Vec<Node> = elements(&doc, "cell").collect();
    assert_eq!(cells.len(), 9);

    let numbered: Vec<(&str, &str, &str)> = cells
        .iter()
        .filter_map(|c| Some((c.attribute("x")?, c.attribute("y")?, c.attribute("number")?)))
        .collect();
    assert_eq!(
        numbered,
        vec![("1", "1", "1"), ("2", "1", "2"), ("3", "1", "3"), ("1", "2", "4"), ("1", "3", "5")]
    );
    assert!(cells.iter().all(|c| c.attribute("solution").is_some()));
}

#[test]
fn test_words_list_member_cells() {
    let xml = export();
    let doc = Document::parse(&xml).unwrap();

    let words: Vec<Node> = elements(&doc, "word").collect();
    assert_eq!(words.len(), 6);

    // Word 4 is the first down word: column 1
    let word = words.iter().find(|w| w.attribute("id") == Some("4")).unwrap();
    let cells: Vec<(&str, &str)> = word
        .children()
        .filter(|n| n.is_element())
        .map(|n| (n.attribute("x").unwrap(), n.attribute("y").unwrap()))
        .collect();
    assert_eq!(cells, vec![("1", "1"), ("1", "2"), ("1", "3")]);
}

#[test]
fn test_clue_blocks() {
    let xml = export();
    let doc = Document::parse(&xml).unwrap();

    let blocks: Vec<Node> = elements(&doc, "clues").collect();
    assert_eq!(blocks.len(), 2);

    let heading = |block: &Node| {
        block
            .descendants()
            .find(|n| n.tag_name().name() == "b")
            .and_then(|n| n.text())
            .map(str::to_string)
    };
    assert_eq!(heading(&blocks[0]).as_deref(), Some("Across"));
    assert_eq!(heading(&blocks[1]).as_deref(), Some("Down"));

    let down: Vec<(&str, &str)> = blocks[1]
        .children()
        .filter(|n| n.tag_name().name() == "clue")
        .map(|n| (n.attribute("number").unwrap(), n.attribute("word").unwrap()))
        .collect();
    assert_eq!(down, vec![("1", "4"), ("2", "5"), ("3", "6")]);
}

#[test]
fn test_emphasis_escaped_exactly_once() {
    let xml = export();
    assert!(xml.contains(r#"<clue word="3" number="5">1 <i>&amp; &lt;</i>2&gt; 3</clue>"#));

    let doc = Document::parse(&xml).unwrap();
    let clue = elements(&doc, "clue")
        .find(|n| n.attribute("number") == Some("5"))
        .unwrap();
    let italic = clue.children().find(|n| n.tag_name().name() == "i").unwrap();
    assert_eq!(italic.text(), Some("& <"));

    let full: String = clue.descendants().filter(|n| n.is_text()).filter_map(|n| n.text()).collect::<Vec<_>>().concat();
    assert_eq!(full, "1 & <2> 3");
}
