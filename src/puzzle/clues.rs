use crate::models::{ClueEntry, ClueSheet, Numbering, Orientation, Placement};

/// Number crossword start cells top-to-bottom, left-to-right and split the
/// clues into across and down lists.
pub fn build_clue_sheet(placements: &[Placement]) -> ClueSheet {
    let mut ordered: Vec<&Placement> = placements.iter().collect();
    ordered.sort_by_key(|p| p.start);

    let mut numbering = Numbering::default();
    let mut next = 1;
    for p in &ordered {
        if !numbering.contains(p.start) {
            numbering.insert(p.start, next);
            next += 1;
        }
    }

    let mut sheet = ClueSheet {
        numbering,
        ..ClueSheet::default()
    };

    for p in ordered {
        let Some(number) = sheet.numbering.get(p.start) else {
            continue;
        };
        let entry = ClueEntry {
            number,
            clue: p.clue.clone().unwrap_or_default(),
            length: p.letter_count(),
        };
        match p.orientation() {
            Some(Orientation::Across) => sheet.across.push(entry),
            Some(Orientation::Down) => sheet.down.push(entry),
            None => {}
        }
    }

    sheet
}
