use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// A4, in points.
const A4_PORTRAIT: (f32, f32) = (595.0, 842.0);
const A4_LANDSCAPE: (f32, f32) = (842.0, 595.0);

/// Oltre questo numero di settimane le etichette dell'asse x vengono diradate.
const MAX_X_LABELS: usize = 30;

pub struct PdfManager {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    page_refs: Vec<Ref>,
    current_content_id: Option<Ref>,

    page_w: f32,
    page_h: f32,
    margin: f32,
    row_h: f32,

    next_id: i32,
    font_id: Ref,

    font_size: f32,
    header_font_size: f32,
    title_font_size: f32,
}

impl Default for PdfManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Helvetica uses WinAnsiEncoding: Latin-1 passes through, the rest becomes '?'.
fn encode_text(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| u8::try_from(u32::from(c)).unwrap_or(b'?'))
        .collect()
}

/// Rough Helvetica advance width, good enough for centering.
fn text_width(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * 0.5
}

/// 1, 2 or 5 times a power of ten, at least `raw`.
fn nice_step(raw: f32) -> f32 {
    if raw <= 0.0 {
        return 1.0;
    }
    let pow10 = 10f32.powf(raw.log10().floor());
    let frac = raw / pow10;
    let nice = if frac <= 1.0 {
        1.0
    } else if frac <= 2.0 {
        2.0
    } else if frac <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * pow10
}

impl PdfManager {
    pub fn new() -> Self {
        let mut pdf = Pdf::new();

        // ID gestiti a mano
        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);
        let next_id = 4;

        pdf.type1_font(font_id)
            .base_font(Name(b"Helvetica"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            page_refs: Vec::new(),
            current_content_id: None,

            page_w: A4_PORTRAIT.0,
            page_h: A4_PORTRAIT.1,
            margin: 50.0,
            row_h: 20.0,

            next_id,
            font_id,

            font_size: 10.0,
            header_font_size: 11.0,
            title_font_size: 14.0,
        }
    }

    pub fn page_count(&self) -> usize {
        self.page_refs.len()
    }

    /// Genera un nuovo Ref univoco
    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    /// Crea una nuova pagina (nelle dimensioni date) e il relativo contenuto
    fn new_page(&mut self, size: (f32, f32)) -> Content {
        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();

        self.page_refs.push(page_id);
        (self.page_w, self.page_h) = size;

        let mut page = self.pdf.page(page_id);
        page.parent(self.pages_id)
            .media_box(Rect::new(0.0, 0.0, self.page_w, self.page_h))
            .contents(content_id);

        page.resources().fonts().pair(Name(b"F1"), self.font_id);

        self.current_content_id = Some(content_id);

        Content::new()
    }

    /// Scrive lo stream della pagina corrente
    fn finalize_page(&mut self, content: Content) {
        if let Some(id) = self.current_content_id.take() {
            self.pdf.stream(id, &content.finish());
        }
    }

    fn build_pages_tree(&mut self) {
        let mut pages = self.pdf.pages(self.pages_id);
        pages.count(self.page_refs.len() as i32);
        pages.kids(self.page_refs.clone());
    }

    /// Text with an arbitrary orientation; `(cos, sin)` of the baseline angle.
    fn draw_text_rotated(
        &self,
        content: &mut Content,
        x: f32,
        y: f32,
        size: f32,
        (cos, sin): (f32, f32),
        text: &str,
    ) {
        content.begin_text();
        content.set_font(Name(b"F1"), size);
        content.set_text_matrix([cos, sin, -sin, cos, x, y]);
        content.show(Str(&encode_text(text)));
        content.end_text();
    }

    fn draw_text(&self, content: &mut Content, x: f32, y: f32, size: f32, text: &str) {
        self.draw_text_rotated(content, x, y, size, (1.0, 0.0), text);
    }

    fn draw_line(&self, content: &mut Content, from: (f32, f32), to: (f32, f32)) {
        content.move_to(from.0, from.1);
        content.line_to(to.0, to.1);
        content.stroke();
    }

    fn fill_rect(&self, content: &mut Content, (x, y, w, h): (f32, f32, f32, f32), rgb: [f32; 3]) {
        content.save_state();
        content.set_fill_rgb(rgb[0], rgb[1], rgb[2]);
        content.rect(x, y, w, h);
        content.fill_nonzero();
        content.restore_state();
    }

    fn draw_cell_borders(&self, content: &mut Content, x: f32, y: f32, w: f32, h: f32) {
        content.save_state();
        content.set_stroke_rgb(0.65, 0.65, 0.65);
        content.rect(x, y, w, h);
        content.stroke();
        content.restore_state();
    }

    fn draw_row(
        &self,
        content: &mut Content,
        y: f32,
        col_widths: &[f32],
        row: &[String],
        font_size: f32,
    ) {
        let mut x = self.margin;

        for (text, &w) in row.iter().zip(col_widths) {
            self.draw_text(content, x + 4.0, y + 5.0, font_size, text);
            self.draw_cell_borders(content, x, y, w, self.row_h);
            x += w;
        }
    }

    /// Larghezza colonne da header + contenuto, ridotte se eccedono la pagina
    fn compute_col_widths(&self, headers: &[&str], rows: &[Vec<String>]) -> Vec<f32> {
        let mut widths: Vec<f32> = headers
            .iter()
            .map(|h| h.chars().count() as f32 * 6.5 + 12.0)
            .collect();

        for row in rows {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = w.max(cell.chars().count() as f32 * 6.2 + 12.0);
            }
        }

        let total: f32 = widths.iter().sum();
        let max = self.page_w - 2.0 * self.margin;

        if total > max {
            let scale = max / total;
            for w in &mut widths {
                *w *= scale;
            }
        }

        widths
    }

    fn draw_title_and_page_number(&self, content: &mut Content, title: &str) {
        let x = (self.page_w - text_width(title, self.title_font_size)) / 2.0;
        self.draw_text(
            content,
            x.max(self.margin),
            self.page_h - self.margin + 15.0,
            self.title_font_size,
            title,
        );

        let pg = format!("Page {}", self.page_refs.len());
        self.draw_text(
            content,
            self.page_w - self.margin - 40.0,
            self.margin - 35.0,
            self.font_size,
            &pg,
        );
    }

    /// Bar chart on a landscape page: one bar per label.
    pub fn write_bar_chart(
        &mut self,
        title: &str,
        x_label: &str,
        y_label: &str,
        labels: &[String],
        values: &[f64],
    ) {
        let mut content = self.new_page(A4_LANDSCAPE);
        self.draw_title_and_page_number(&mut content, title);

        // area del grafico
        let left = self.margin + 40.0;
        let right = self.page_w - self.margin;
        let bottom = self.margin + 60.0;
        let top = self.page_h - self.margin - 20.0;
        let (plot_w, plot_h) = (right - left, top - bottom);

        let max_value = values.iter().cloned().fold(0.0_f64, f64::max) as f32;
        let step = nice_step(max_value / 5.0);
        let y_max = (max_value / step).ceil().max(1.0) * step;
        let scale = plot_h / y_max;

        // griglia e tacche dell'asse y
        content.save_state();
        content.set_line_width(0.5);
        content.set_stroke_rgb(0.85, 0.85, 0.85);
        let ticks = (y_max / step).round() as usize;
        for i in 0..=ticks {
            let v = i as f32 * step;
            let y = bottom + v * scale;
            self.draw_line(&mut content, (left, y), (right, y));
            let tick = if step < 1.0 {
                format!("{v:.1}")
            } else {
                format!("{v:.0}")
            };
            self.draw_text(
                &mut content,
                left - 6.0 - text_width(&tick, self.font_size),
                y - 3.0,
                self.font_size,
                &tick,
            );
        }
        content.restore_state();

        // barre
        let slot = plot_w / labels.len().max(1) as f32;
        let bar_w = slot * 0.8;
        let label_every = labels.len().div_ceil(MAX_X_LABELS).max(1);

        for (i, (label, &value)) in labels.iter().zip(values).enumerate() {
            let x = left + i as f32 * slot + (slot - bar_w) / 2.0;
            let h = value as f32 * scale;
            if h > 0.0 {
                self.fill_rect(&mut content, (x, bottom, bar_w, h), [0.85, 0.1, 0.1]);
            }

            if i % label_every == 0 {
                // verticale, dall'alto verso il basso sotto l'asse
                self.draw_text_rotated(
                    &mut content,
                    x + bar_w / 2.0 - 3.0,
                    bottom - 4.0,
                    self.font_size - 2.0,
                    (0.0, -1.0),
                    label,
                );
            }
        }

        // assi
        content.save_state();
        content.set_stroke_rgb(0.0, 0.0, 0.0);
        self.draw_line(&mut content, (left, bottom), (right, bottom));
        self.draw_line(&mut content, (left, bottom), (left, top));
        content.restore_state();

        self.draw_text(
            &mut content,
            left + (plot_w - text_width(x_label, self.font_size)) / 2.0,
            self.margin - 15.0,
            self.font_size,
            x_label,
        );
        self.draw_text_rotated(
            &mut content,
            self.margin - 20.0,
            bottom + (plot_h - text_width(y_label, self.font_size)) / 2.0,
            self.font_size,
            (0.0, 1.0),
            y_label,
        );

        self.finalize_page(content);
    }

    /// Tabella multipagina con titolo; senza righe resta solo l'header.
    pub fn write_table(&mut self, title: &str, headers: &[&str], rows: &[Vec<String>]) {
        let header_row: Vec<String> = headers.iter().map(|s| s.to_string()).collect();
        let mut remaining: &[Vec<String>] = rows;

        loop {
            let mut content = self.new_page(A4_PORTRAIT);
            self.draw_title_and_page_number(&mut content, title);

            let col_widths = self.compute_col_widths(headers, rows);
            let table_w: f32 = col_widths.iter().sum();
            let mut y = self.page_h - self.margin - 30.0;

            self.fill_rect(
                &mut content,
                (self.margin, y, table_w, self.row_h),
                [0.85, 0.87, 0.90],
            );
            self.draw_row(&mut content, y, &col_widths, &header_row, self.header_font_size);
            y -= self.row_h;

            let mut consumed = 0;
            for (i, row) in remaining.iter().enumerate() {
                if y - self.row_h < self.margin {
                    break;
                }

                // zebra stripe
                if i % 2 == 0 {
                    self.fill_rect(
                        &mut content,
                        (self.margin, y, table_w, self.row_h),
                        [0.96, 0.96, 0.96],
                    );
                }

                self.draw_row(&mut content, y, &col_widths, row, self.font_size);
                y -= self.row_h;
                consumed += 1;
            }

            self.finalize_page(content);
            remaining = &remaining[consumed..];

            if remaining.is_empty() {
                break;
            }
        }
    }

    pub fn finish(mut self) -> Vec<u8> {
        // Catalog + Pages una sola volta, qui
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        self.build_pages_tree();
        self.pdf.finish()
    }

    pub fn save(self, path: &Path) -> std::io::Result<()> {
        let bytes = self.finish();
        let mut f = File::create(path)?;
        f.write_all(&bytes)?;
        Ok(())
    }
}
