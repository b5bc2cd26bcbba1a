//! Loan domain models and DTOs.
//!
//! A loan hands a student either a library book or one of the school's
//! computers; the computer is identified by a free-text label, not a
//! catalogued entity.

use chrono::NaiveDate;
use secretaria_core::{ListFilter, contains_ci};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::enums::LoanKind;
use crate::ids::{BookId, LoanId, StudentId};

/// A loan, as returned by the `/emprestimos/` collection.
///
/// The student and book references are write-only on the wire; list
/// responses carry the resolved display names instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Loan {
    pub id: LoanId,
    #[serde(rename = "aluno_nome", default)]
    pub student_name: Option<String>,
    #[serde(rename = "livro_titulo", default)]
    pub book_title: Option<String>,
    /// Older records omit the kind; they are all book loans.
    #[serde(rename = "tipo", default = "default_loan_kind")]
    pub kind: LoanKind,
    #[serde(rename = "computador", default)]
    pub computer: Option<String>,
    #[serde(rename = "data_emprestimo")]
    pub loan_date: NaiveDate,
    /// Null while the loan is outstanding.
    #[serde(rename = "data_devolucao", default)]
    pub return_date: Option<NaiveDate>,
    #[serde(rename = "devolvido", default)]
    pub returned: bool,
}

fn default_loan_kind() -> LoanKind {
    LoanKind::Book
}

impl Loan {
    pub fn is_outstanding(&self) -> bool {
        !self.returned
    }

    /// What was lent, for table display.
    pub fn resource_label(&self) -> &str {
        match self.kind {
            LoanKind::Book => self.book_title.as_deref().unwrap_or("Livro N/D"),
            LoanKind::Computer => self.computer.as_deref().unwrap_or("Computador N/D"),
        }
    }
}

/// DTO for registering a loan.
#[derive(Debug, Clone, Serialize, Validate)]
#[validate(schema(function = validate_loan_resource))]
pub struct CreateLoanDto {
    #[serde(rename = "aluno")]
    pub student: StudentId,
    #[serde(rename = "tipo")]
    pub kind: LoanKind,
    #[serde(rename = "livro", skip_serializing_if = "Option::is_none")]
    pub book: Option<BookId>,
    #[serde(rename = "computador", skip_serializing_if = "Option::is_none")]
    pub computer: Option<String>,
    #[serde(rename = "data_emprestimo")]
    pub loan_date: NaiveDate,
    #[serde(rename = "devolvido")]
    pub returned: bool,
}

impl CreateLoanDto {
    pub fn book(student: StudentId, book: BookId, loan_date: NaiveDate) -> Self {
        Self {
            student,
            kind: LoanKind::Book,
            book: Some(book),
            computer: None,
            loan_date,
            returned: false,
        }
    }

    pub fn computer(student: StudentId, label: impl Into<String>, loan_date: NaiveDate) -> Self {
        Self {
            student,
            kind: LoanKind::Computer,
            book: None,
            computer: Some(label.into()),
            loan_date,
            returned: false,
        }
    }
}

/// The lent resource must match the declared kind.
fn validate_loan_resource(dto: &CreateLoanDto) -> Result<(), ValidationError> {
    match dto.kind {
        LoanKind::Book if dto.book.is_none() => Err(ValidationError::new("livro")
            .with_message("a book loan must reference a catalogued book".into())),
        LoanKind::Computer if dto.computer.as_deref().is_none_or(str::is_empty) => {
            Err(ValidationError::new("computador")
                .with_message("a computer loan must name the computer".into()))
        }
        _ => Ok(()),
    }
}

/// Client-side filter criteria for the loan list.
#[derive(Debug, Clone, Default)]
pub struct LoanFilter {
    pub student_name: Option<String>,
    pub kind: Option<LoanKind>,
    /// Keep only loans not yet returned (the "pendentes" view).
    pub outstanding_only: bool,
}

impl ListFilter<Loan> for LoanFilter {
    fn is_empty(&self) -> bool {
        self.student_name.is_none() && self.kind.is_none() && !self.outstanding_only
    }

    fn matches(&self, record: &Loan) -> bool {
        self.student_name.as_deref().is_none_or(|needle| {
            record
                .student_name
                .as_deref()
                .is_some_and(|name| contains_ci(name, needle))
        }) && self.kind.is_none_or(|kind| record.kind == kind)
            && (!self.outstanding_only || record.is_outstanding())
    }
}
