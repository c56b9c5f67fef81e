//! Circuit diagram rendering.

use image::Rgba;
use tracing::debug;

use circuitlab_ir::{Circuit, GateKind, GateRecord, QubitId};

use crate::error::RenderResult;
use crate::font;
use crate::surface::Surface;

const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);
const WIRE: Rgba<u8> = Rgba([40, 40, 40, 255]);
const LABEL: Rgba<u8> = Rgba([255, 255, 255, 255]);
const HADAMARD: Rgba<u8> = Rgba([250, 77, 86, 255]);
const PAULI_X: Rgba<u8> = Rgba([5, 130, 202, 255]);
const CONTROL: Rgba<u8> = Rgba([0, 45, 156, 255]);
const MEASURE: Rgba<u8> = Rgba([120, 120, 120, 255]);
const BLOCK: Rgba<u8> = Rgba([111, 45, 168, 255]);

const LEFT_MARGIN: i32 = 56;
const RIGHT_MARGIN: i32 = 24;
const TOP_MARGIN: i32 = 16;
const ROW_HEIGHT: i32 = 56;
const BOX_SIZE: u32 = 36;
const COLUMN_PADDING: u32 = 24;
const LABEL_SCALE: u32 = 2;
const CONTROL_RADIUS: i32 = 6;
const TARGET_RADIUS: i32 = 13;

/// Render `circuit` as a PNG diagram.
///
/// One row per qubit plus a classical register row at the bottom. Records are
/// placed in the columns computed by [`Circuit::layers`].
pub fn render_circuit(circuit: &Circuit) -> RenderResult<Vec<u8>> {
    let layers = circuit.layers();
    let num_qubits = circuit.num_qubits();

    let widths: Vec<u32> = layers
        .iter()
        .map(|layer| {
            layer
                .iter()
                .map(|record| box_width(record))
                .max()
                .unwrap_or(BOX_SIZE)
                + COLUMN_PADDING
        })
        .collect();
    let body: u32 = widths.iter().sum::<u32>().max(BOX_SIZE + COLUMN_PADDING);

    let width = LEFT_MARGIN as u32 + body + RIGHT_MARGIN as u32;
    let height = TOP_MARGIN as u32 * 2 + ROW_HEIGHT as u32 * (num_qubits + 1);
    let mut surface = Surface::new(width, height, BACKGROUND);

    draw_wires(&mut surface, num_qubits);

    let mut x = LEFT_MARGIN;
    for (layer, column_width) in layers.iter().zip(&widths) {
        let cx = x + (*column_width / 2) as i32;
        for record in layer {
            draw_record(&mut surface, record, cx, num_qubits);
        }
        x += *column_width as i32;
    }

    debug!(
        "Rendered circuit diagram: {} columns, {}x{} px",
        layers.len(),
        surface.width(),
        surface.height()
    );
    surface.encode_png()
}

fn wire_y(qubit: u32) -> i32 {
    TOP_MARGIN + ROW_HEIGHT * qubit as i32 + ROW_HEIGHT / 2
}

fn classical_y(num_qubits: u32) -> i32 {
    wire_y(num_qubits)
}

fn box_width(record: &GateRecord) -> u32 {
    match record {
        GateRecord::Block {
            kind: GateKind::Grover,
            ..
        } => font::text_width("GROVER", LABEL_SCALE) + 16,
        _ => BOX_SIZE,
    }
}

fn draw_wires(surface: &mut Surface, num_qubits: u32) {
    let end = surface.width() as i32 - RIGHT_MARGIN / 2;
    for q in 0..num_qubits {
        let y = wire_y(q);
        surface.text_centered(LEFT_MARGIN / 2, y, &QubitId(q).to_string(), LABEL_SCALE, WIRE);
        surface.hline(LEFT_MARGIN, end, y, 2, WIRE);
    }

    // Classical register: double line with its width written at the start.
    let y = classical_y(num_qubits);
    surface.text_centered(LEFT_MARGIN / 2, y, "c", LABEL_SCALE, WIRE);
    surface.hline(LEFT_MARGIN, end, y - 2, 1, WIRE);
    surface.hline(LEFT_MARGIN, end, y + 2, 1, WIRE);
    surface.line((LEFT_MARGIN + 6, y + 7), (LEFT_MARGIN + 12, y - 7), WIRE);
    surface.text(LEFT_MARGIN + 14, y - 16, &num_qubits.to_string(), 1, WIRE);
}

fn draw_record(surface: &mut Surface, record: &GateRecord, cx: i32, num_qubits: u32) {
    match record {
        GateRecord::Single { kind, target } => {
            draw_gate_box(surface, cx, target.0, kind.name(), color_for(*kind));
        }
        GateRecord::Controlled {
            kind,
            control,
            target,
        } => {
            let (yc, yt) = (wire_y(control.0), wire_y(target.0));
            surface.vline(cx, yc, yt, 2, CONTROL);
            surface.dot((cx, yc), CONTROL_RADIUS, CONTROL);
            if *kind == GateKind::CX {
                surface.dot((cx, yt), TARGET_RADIUS, CONTROL);
                surface.ring((cx, yt), TARGET_RADIUS, CONTROL);
                surface.hline(cx - TARGET_RADIUS + 4, cx + TARGET_RADIUS - 4, yt, 2, LABEL);
                surface.vline(cx, yt - TARGET_RADIUS + 4, yt + TARGET_RADIUS - 4, 2, LABEL);
            } else {
                surface.dot((cx, yt), CONTROL_RADIUS, CONTROL);
            }
        }
        GateRecord::MeasureAll => {
            let yc = classical_y(num_qubits);
            surface.vline(cx, wire_y(0), yc, 2, MEASURE);
            for q in 0..num_qubits {
                draw_gate_box(surface, cx, q, "M", MEASURE);
            }
            surface.dot((cx, yc), 4, MEASURE);
        }
        GateRecord::Block { kind, qubits } => match kind {
            GateKind::Grover => {
                let (lo, hi) = record.span(num_qubits);
                let w = box_width(record);
                let top = wire_y(lo) - BOX_SIZE as i32 / 2;
                let bottom = wire_y(hi) + BOX_SIZE as i32 / 2;
                let h = (bottom - top) as u32;
                let x = cx - w as i32 / 2;
                surface.fill_rect(x, top, w, h, BLOCK);
                surface.text_centered(cx, (top + bottom) / 2, "GROVER", LABEL_SCALE, LABEL);
            }
            _ => {
                for q in qubits {
                    draw_gate_box(surface, cx, q.0, kind.name(), color_for(*kind));
                }
            }
        },
    }
}

fn draw_gate_box(surface: &mut Surface, cx: i32, qubit: u32, label: &str, color: Rgba<u8>) {
    let half = BOX_SIZE as i32 / 2;
    let cy = wire_y(qubit);
    surface.fill_rect(cx - half, cy - half, BOX_SIZE, BOX_SIZE, color);
    surface.stroke_rect(cx - half, cy - half, BOX_SIZE, BOX_SIZE, WIRE);
    surface.text_centered(cx, cy, label, LABEL_SCALE, LABEL);
}

fn color_for(kind: GateKind) -> Rgba<u8> {
    match kind {
        GateKind::H => HADAMARD,
        GateKind::X => PAULI_X,
        GateKind::CX | GateKind::CZ => CONTROL,
        GateKind::Measure => MEASURE,
        GateKind::Grover => BLOCK,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use circuitlab_ir::Example;

    fn decode(bytes: &[u8]) -> image::RgbaImage {
        image::load_from_memory_with_format(bytes, image::ImageFormat::Png)
            .unwrap()
            .to_rgba8()
    }

    #[test]
    fn test_empty_circuit_renders_wires() {
        let circuit = Circuit::new(2).unwrap();
        let img = decode(&render_circuit(&circuit).unwrap());
        assert_eq!(img.height(), (TOP_MARGIN * 2 + ROW_HEIGHT * 3) as u32);
        // The first wire crosses the middle of the body.
        let x = (LEFT_MARGIN + 10) as u32;
        assert_eq!(*img.get_pixel(x, wire_y(0) as u32), WIRE);
    }

    #[test]
    fn test_width_grows_with_depth() {
        let mut shallow = Circuit::new(1).unwrap();
        shallow.h(QubitId(0)).unwrap();
        let mut deep = shallow.clone();
        deep.x(QubitId(0)).unwrap().h(QubitId(0)).unwrap();

        let a = decode(&render_circuit(&shallow).unwrap());
        let b = decode(&render_circuit(&deep).unwrap());
        assert!(b.width() > a.width());
    }

    #[test]
    fn test_hadamard_box_color() {
        let mut circuit = Circuit::new(1).unwrap();
        circuit.h(QubitId(0)).unwrap();
        let img = decode(&render_circuit(&circuit).unwrap());

        // Corner of the box, inside the border, away from the label.
        let cx = LEFT_MARGIN + ((BOX_SIZE + COLUMN_PADDING) / 2) as i32;
        let px = (cx - BOX_SIZE as i32 / 2 + 2) as u32;
        let py = (wire_y(0) - BOX_SIZE as i32 / 2 + 2) as u32;
        assert_eq!(*img.get_pixel(px, py), HADAMARD);
    }

    #[test]
    fn test_examples_render() {
        for example in Example::all() {
            let mut circuit = example.build(2).unwrap();
            circuit.measure_all();
            let bytes = render_circuit(&circuit).unwrap();
            assert_eq!(&bytes[..4], b"\x89PNG");
        }
    }
}
