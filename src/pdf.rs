// ABOUTME: Renders a plan and its profile into a paginated A4 PDF document
// ABOUTME: Builds styled text lines first, then lays them out with builtin Helvetica fonts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMind Contributors

//! # PDF Export
//!
//! Layout is two-phase: [`document_lines`] flattens the plan into styled
//! lines (pure and testable), then [`render_plan_pdf`] wraps and paginates
//! them. Builtin PDF fonts only cover Latin-1, so text is reduced to
//! printable ASCII before it is written.

use printpdf::{
    BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference,
};
use tracing::debug;

use fitmind_core::models::{Meal, Plan, UserProfile};

use crate::errors::{AppError, AppResult};

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 18.0;
const LAYER_NAME: &str = "Content";

/// Visual weight of a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    /// Document title
    Title,
    /// Section heading
    Heading,
    /// Day or category heading
    Subheading,
    /// Regular text
    Body,
    /// Vertical gap
    Spacer,
}

impl LineStyle {
    const fn font_size(self) -> f32 {
        match self {
            Self::Title => 20.0,
            Self::Heading => 15.0,
            Self::Subheading => 12.0,
            Self::Body | Self::Spacer => 10.0,
        }
    }

    const fn bold(self) -> bool {
        matches!(self, Self::Title | Self::Heading | Self::Subheading)
    }

    /// Vertical advance after this line
    fn leading_mm(self) -> f32 {
        match self {
            Self::Spacer => 3.0,
            _ => self.font_size() * 0.3528 * 1.35,
        }
    }

    /// Characters that fit on one line, assuming an average glyph of half an em
    fn wrap_width(self) -> usize {
        let usable = PAGE_WIDTH_MM - 2.0 * MARGIN_MM;
        let glyph_mm = self.font_size() * 0.3528 * 0.5;
        (usable / glyph_mm) as usize
    }
}

/// A single styled line before wrapping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentLine {
    /// Style
    pub style: LineStyle,
    /// Text content
    pub text: String,
}

struct LineBuilder {
    lines: Vec<DocumentLine>,
}

impl LineBuilder {
    fn push(&mut self, style: LineStyle, text: impl Into<String>) {
        self.lines.push(DocumentLine {
            style,
            text: text.into(),
        });
    }

    fn spacer(&mut self) {
        self.push(LineStyle::Spacer, "");
    }

    fn bullets(&mut self, items: &[String]) {
        for item in items {
            self.push(LineStyle::Body, format!("- {item}"));
        }
    }

    fn meal(&mut self, slot: &str, meal: &Meal) {
        self.push(
            LineStyle::Body,
            format!(
                "{slot}: {} ({} kcal, P {}g / C {}g / F {}g, {})",
                meal.name, meal.calories, meal.protein, meal.carbs, meal.fats, meal.cooking_time
            ),
        );
    }
}

/// Flatten a plan into styled lines in reading order
#[must_use]
pub fn document_lines(plan: &Plan, profile: &UserProfile) -> Vec<DocumentLine> {
    let mut doc = LineBuilder { lines: Vec::new() };

    doc.push(LineStyle::Title, &plan.workout_plan.title);
    doc.push(
        LineStyle::Body,
        format!(
            "Prepared for {}, age {} | Goal: {} | Level: {} | Location: {} | Diet: {}",
            profile.name,
            profile.age,
            profile.fitness_goal,
            profile.fitness_level,
            profile.workout_location,
            profile.dietary_preference
        ),
    );
    doc.push(
        LineStyle::Body,
        format!("Created {}", plan.created_at.format("%Y-%m-%d")),
    );
    doc.spacer();

    doc.push(LineStyle::Heading, "Workout Plan");
    doc.push(LineStyle::Body, &plan.workout_plan.description);
    doc.push(
        LineStyle::Body,
        format!(
            "Duration: {} | Frequency: {}",
            plan.workout_plan.duration, plan.workout_plan.frequency
        ),
    );
    for day in &plan.workout_plan.days {
        doc.spacer();
        doc.push(
            LineStyle::Subheading,
            format!("{}: {} ({})", day.day, day.focus, day.total_time),
        );
        if !day.warmup.is_empty() {
            doc.push(LineStyle::Body, format!("Warm-up: {}", day.warmup.join(", ")));
        }
        if day.exercises.is_empty() {
            doc.push(LineStyle::Body, "Rest and recover.");
        }
        for exercise in &day.exercises {
            doc.push(
                LineStyle::Body,
                format!(
                    "- {}: {} sets x {}, rest {}. {}",
                    exercise.name,
                    exercise.sets,
                    exercise.reps,
                    exercise.rest_time,
                    exercise.instructions
                ),
            );
        }
        if !day.cooldown.is_empty() {
            doc.push(LineStyle::Body, format!("Cool-down: {}", day.cooldown.join(", ")));
        }
    }
    doc.spacer();

    doc.push(LineStyle::Heading, &plan.diet_plan.title);
    doc.push(LineStyle::Body, &plan.diet_plan.description);
    for day in &plan.diet_plan.days {
        doc.spacer();
        doc.push(
            LineStyle::Subheading,
            format!("{}: {} kcal, water {}", day.day, day.total_calories, day.water_intake),
        );
        doc.meal("Breakfast", &day.breakfast);
        doc.meal("Lunch", &day.lunch);
        doc.meal("Dinner", &day.dinner);
        for snack in &day.snacks {
            doc.meal("Snack", snack);
        }
    }
    doc.spacer();
    doc.push(LineStyle::Subheading, "Guidelines");
    doc.bullets(&plan.diet_plan.guidelines);
    doc.spacer();

    doc.push(LineStyle::Heading, "Tips");
    for (category, tips) in [
        ("Lifestyle", &plan.tips.lifestyle),
        ("Motivation", &plan.tips.motivation),
        ("Posture", &plan.tips.posture),
        ("Recovery", &plan.tips.recovery),
    ] {
        doc.push(LineStyle::Subheading, category);
        doc.bullets(tips);
    }
    doc.spacer();

    doc.push(LineStyle::Heading, "Progress Tracking");
    doc.push(LineStyle::Subheading, "Weekly Goals");
    doc.bullets(&plan.progress.weekly_goals);
    doc.push(LineStyle::Subheading, "Measurements");
    doc.bullets(&plan.progress.measurements);
    doc.push(LineStyle::Subheading, "Checkpoints");
    doc.bullets(&plan.progress.checkpoints);

    doc.lines
}

/// Reduce text to printable ASCII for the builtin fonts
fn to_ascii(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\u{2018}' | '\u{2019}' => '\'',
            '\u{201C}' | '\u{201D}' => '"',
            '\u{2013}' | '\u{2014}' => '-',
            c if c.is_ascii_graphic() || c == ' ' => c,
            c if c.is_whitespace() => ' ',
            _ => '?',
        })
        .collect()
}

/// Greedy word wrap; words longer than `width` are split
fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word = word.to_owned();
        while word.len() > width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let rest = word.split_off(width);
            lines.push(word);
            word = rest;
        }
        if !current.is_empty() && current.len() + 1 + word.len() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(&word);
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

struct PageCursor<'a> {
    doc: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    y_mm: f32,
    pages: usize,
}

impl PageCursor<'_> {
    fn ensure_room(&mut self, needed_mm: f32) {
        if self.y_mm - needed_mm >= MARGIN_MM {
            return;
        }
        let (page, layer) = self
            .doc
            .add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), LAYER_NAME);
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.y_mm = PAGE_HEIGHT_MM - MARGIN_MM;
        self.pages += 1;
    }

    fn write(&mut self, text: &str, style: LineStyle, font: &IndirectFontRef) {
        let advance = style.leading_mm();
        self.ensure_room(advance);
        self.layer
            .use_text(text, style.font_size(), Mm(MARGIN_MM), Mm(self.y_mm), font);
        self.y_mm -= advance;
    }
}

/// Render the plan as PDF bytes
///
/// # Errors
///
/// Returns `InternalError` if the PDF library fails to embed fonts or
/// serialize the document.
pub fn render_plan_pdf(plan: &Plan, profile: &UserProfile) -> AppResult<Vec<u8>> {
    render_paginated(plan, profile).map(|(bytes, _)| bytes)
}

/// Serialized document together with its page count
fn render_paginated(plan: &Plan, profile: &UserProfile) -> AppResult<(Vec<u8>, usize)> {
    let title = to_ascii(&plan.workout_plan.title);
    let (doc, page, layer) = PdfDocument::new(
        title.as_str(),
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        LAYER_NAME,
    );
    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| AppError::internal(format!("Failed to load PDF font: {e:?}")))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| AppError::internal(format!("Failed to load PDF font: {e:?}")))?;

    let mut cursor = PageCursor {
        layer: doc.get_page(page).get_layer(layer),
        doc: &doc,
        y_mm: PAGE_HEIGHT_MM - MARGIN_MM,
        pages: 1,
    };

    for line in document_lines(plan, profile) {
        if line.style == LineStyle::Spacer {
            cursor.ensure_room(LineStyle::Spacer.leading_mm());
            cursor.y_mm -= LineStyle::Spacer.leading_mm();
            continue;
        }
        let font = if line.style.bold() { &bold } else { &regular };
        for wrapped in wrap(&to_ascii(&line.text), line.style.wrap_width()) {
            cursor.write(&wrapped, line.style, font);
        }
    }

    let pages = cursor.pages;
    let bytes = doc
        .save_to_bytes()
        .map_err(|e| AppError::internal(format!("Failed to serialize PDF: {e:?}")))?;
    debug!(pages, bytes = bytes.len(), "Rendered plan PDF");
    Ok((bytes, pages))
}

/// Attachment filename for a profile's plan
#[must_use]
pub fn pdf_filename(profile: &UserProfile) -> String {
    let name: String = profile
        .name
        .trim()
        .chars()
        .map(|c| match c {
            '"' | '\\' | '/' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    format!("{name}_fitness_plan.pdf")
}
