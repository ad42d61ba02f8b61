//! PDF backend.
//!
//! Translates a finished [`PageScript`] into a self-contained PDF file:
//! one content stream per page, the two base-14 Helvetica faces with
//! WinAnsi encoding (never embedded), compressed streams, classic xref
//! table. No Info dictionary and no timestamps are written, so identical
//! scripts serialize to identical bytes.

use lopdf::{
    Document, Object, Stream, StringFormat,
    content::{Content, Operation},
    dictionary,
    xref::XrefType,
};

use crate::core::RenderError;
use crate::font::{FontId, winansi};
use crate::layout::{DrawOp, Page, PageScript, Rect, Rule, TextRun};

/// Serialize `script` into PDF 1.5 bytes.
pub fn emit(script: &PageScript) -> Result<Vec<u8>, RenderError> {
    let mut doc = Document::with_version("1.5");
    doc.reference_table.cross_reference_type = XrefType::CrossReferenceTable;

    let id_pages = doc.new_object_id();

    let id_regular = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => FontId::Regular.base_font(),
        "Encoding" => "WinAnsiEncoding",
    });
    let id_bold = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => FontId::Bold.base_font(),
        "Encoding" => "WinAnsiEncoding",
    });
    let id_resources = doc.add_object(dictionary! {
        "Font" => dictionary! {
            FontId::Regular.resource_name() => id_regular,
            FontId::Bold.resource_name() => id_bold,
        },
    });

    let mut kids = vec![];
    for page in &script.pages {
        let content = Content {
            operations: page_operations(page),
        };
        let data = content
            .encode()
            .map_err(|e| RenderError::Pdf(format!("content stream encoding failed: {e}")))?;
        let id_content = doc.add_object(Stream::new(dictionary! {}, data));

        let id_page = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => id_pages,
            "Contents" => id_content,
            "Resources" => id_resources,
        });
        kids.push(id_page.into());
    }

    doc.set_object(
        id_pages,
        dictionary! {
            "Type" => "Pages",
            "Count" => kids.len() as i32,
            "Kids" => kids,
            "MediaBox" => vec![
                0.into(),
                0.into(),
                script.width.into(),
                script.height.into(),
            ],
        },
    );

    let id_catalog = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => id_pages,
    });
    doc.trailer.set("Root", id_catalog);
    doc.compress();

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer)
        .map_err(|e| RenderError::Pdf(format!("document serialization failed: {e}")))?;
    Ok(buffer)
}

fn page_operations(page: &Page) -> Vec<Operation> {
    let mut ops = Vec::new();
    for op in &page.ops {
        match op {
            DrawOp::Text(run) => text_ops(&mut ops, run),
            DrawOp::Rule(rule) => rule_ops(&mut ops, rule),
            DrawOp::Rect(rect) => rect_ops(&mut ops, rect),
        }
    }
    ops
}

fn text_ops(ops: &mut Vec<Operation>, run: &TextRun) {
    ops.push(Operation::new("q", vec![]));
    if let Some(max_width) = run.max_width {
        // Clip box hugging the line: a third of an em below the baseline
        // for descenders, a full em above for ascenders.
        ops.push(Operation::new(
            "re",
            vec![
                run.x.into(),
                (run.y - 0.3 * run.size).into(),
                max_width.into(),
                (1.3 * run.size).into(),
            ],
        ));
        ops.push(Operation::new("W", vec![]));
        ops.push(Operation::new("n", vec![]));
    }
    ops.push(Operation::new(
        "rg",
        vec![run.color.r.into(), run.color.g.into(), run.color.b.into()],
    ));
    ops.push(Operation::new("BT", vec![]));
    ops.push(Operation::new(
        "Tf",
        vec![run.font.resource_name().into(), run.size.into()],
    ));
    ops.push(Operation::new("Td", vec![run.x.into(), run.y.into()]));
    ops.push(Operation::new(
        "Tj",
        vec![Object::String(
            winansi::encode(&run.text),
            StringFormat::Literal,
        )],
    ));
    ops.push(Operation::new("ET", vec![]));
    ops.push(Operation::new("Q", vec![]));
}

fn rule_ops(ops: &mut Vec<Operation>, rule: &Rule) {
    ops.push(Operation::new("q", vec![]));
    ops.push(Operation::new(
        "RG",
        vec![rule.color.r.into(), rule.color.g.into(), rule.color.b.into()],
    ));
    ops.push(Operation::new("w", vec![rule.thickness.into()]));
    ops.push(Operation::new("m", vec![rule.x1.into(), rule.y1.into()]));
    ops.push(Operation::new("l", vec![rule.x2.into(), rule.y2.into()]));
    ops.push(Operation::new("S", vec![]));
    ops.push(Operation::new("Q", vec![]));
}

fn rect_ops(ops: &mut Vec<Operation>, rect: &Rect) {
    ops.push(Operation::new("q", vec![]));
    if let Some(fill) = rect.fill {
        ops.push(Operation::new(
            "rg",
            vec![fill.r.into(), fill.g.into(), fill.b.into()],
        ));
    }
    if let Some(stroke) = rect.stroke {
        ops.push(Operation::new(
            "RG",
            vec![
                stroke.color.r.into(),
                stroke.color.g.into(),
                stroke.color.b.into(),
            ],
        ));
        ops.push(Operation::new("w", vec![stroke.thickness.into()]));
    }
    ops.push(Operation::new(
        "re",
        vec![
            rect.x.into(),
            rect.y.into(),
            rect.width.into(),
            rect.height.into(),
        ],
    ));
    let paint = match (rect.fill.is_some(), rect.stroke.is_some()) {
        (true, true) => "B",
        (true, false) => "f",
        (false, _) => "S",
    };
    ops.push(Operation::new(paint, vec![]));
    ops.push(Operation::new("Q", vec![]));
}
