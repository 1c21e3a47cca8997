//! Form payloads and their client-side rules.
//!
//! Validation here is the only gate between a form and the network: a form
//! that does not validate never issues a request. Rules are the per-field
//! required/length checks the dashboard enforces, nothing deeper.

use crate::models::{BookPayload, NewRecommendation, NewReview, RecommendationUpdate};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BookForm {
    pub title: String,
    pub author: String,
    pub description: String,
}

impl BookForm {
    pub fn validate(&self) -> Result<BookPayload, Vec<String>> {
        let mut errors = Vec::new();
        if self.title.trim().is_empty() {
            errors.push("Please input title".to_string());
        }
        if self.author.trim().is_empty() {
            errors.push("Please input author".to_string());
        }
        if self.description.trim().is_empty() {
            errors.push("Please input description".to_string());
        }
        if self.description.chars().count() > 500 {
            errors.push("Description must be at most 500 characters".to_string());
        }
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(BookPayload {
            product_title: self.title.trim().to_string(),
            product_author: self.author.trim().to_string(),
            product_description: self.description.trim().to_string(),
        })
    }
}

/// The add-review modal on the Books page. The book is already chosen, the
/// rating widget defaults to five stars.
#[derive(Clone, Debug, PartialEq)]
pub struct ReviewForm {
    pub reviewer: String,
    pub comment: String,
    pub rating: u8,
}

impl Default for ReviewForm {
    fn default() -> Self {
        Self {
            reviewer: String::new(),
            comment: String::new(),
            rating: 5,
        }
    }
}

impl ReviewForm {
    pub fn validate(&self, book_id: u64) -> Result<NewReview, Vec<String>> {
        let mut errors = Vec::new();
        if self.reviewer.trim().is_empty() {
            errors.push("Please enter your name".to_string());
        }
        if self.comment.trim().is_empty() {
            errors.push("Please write your review".to_string());
        }
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(NewReview {
            book_id,
            reviewer: self.reviewer.trim().to_string(),
            comment: self.comment.trim().to_string(),
            rating: Some(self.rating.clamp(1, 5)),
        })
    }
}

/// The standalone write-a-review form on the Reviews page, where the book id
/// is typed in by hand.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WriteReviewForm {
    pub book_id: String,
    pub reviewer: String,
    pub comment: String,
}

impl WriteReviewForm {
    pub fn validate(&self) -> Result<NewReview, Vec<String>> {
        let mut errors = Vec::new();
        let book_id = match self.book_id.trim().parse::<u64>() {
            Ok(id) if id >= 1 => Some(id),
            _ => {
                errors.push("Please enter a valid book ID".to_string());
                None
            }
        };
        if self.reviewer.trim().is_empty() {
            errors.push("Please enter your name".to_string());
        }
        if self.comment.trim().is_empty() {
            errors.push("Please write your review".to_string());
        }
        match book_id {
            Some(book_id) if errors.is_empty() => Ok(NewReview {
                book_id,
                reviewer: self.reviewer.trim().to_string(),
                comment: self.comment.trim().to_string(),
                rating: None,
            }),
            _ => Err(errors),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecommendationForm {
    pub book_name: String,
    pub author: String,
    pub rating: Option<u8>,
    pub description: String,
}

impl RecommendationForm {
    pub fn validate(&self) -> Result<NewRecommendation, Vec<String>> {
        let mut errors = Vec::new();
        if self.book_name.trim().is_empty() {
            errors.push("Please enter the book title".to_string());
        }
        if self.author.trim().is_empty() {
            errors.push("Please enter the author name".to_string());
        }
        if self.rating.is_none() {
            errors.push("Please rate this book".to_string());
        }
        let description_len = self.description.trim().chars().count();
        if description_len == 0 {
            errors.push("Please tell us why you love this book".to_string());
        } else if description_len < 20 {
            errors.push("Please write at least 20 characters".to_string());
        } else if description_len > 800 {
            errors.push("Description must be at most 800 characters".to_string());
        }
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(NewRecommendation {
            book_name: self.book_name.trim().to_string(),
            author: self.author.trim().to_string(),
            rating: self.rating.map(f32::from),
            description: Some(self.description.trim().to_string()),
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecommendationEditForm {
    pub book_name: String,
    pub author: String,
}

impl RecommendationEditForm {
    pub fn validate(&self) -> Result<RecommendationUpdate, Vec<String>> {
        let mut errors = Vec::new();
        if self.book_name.trim().is_empty() {
            errors.push("Please input book name!".to_string());
        }
        if self.author.trim().is_empty() {
            errors.push("Please input author name!".to_string());
        }
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(RecommendationUpdate {
            book_name: self.book_name.trim().to_string(),
            author: self.author.trim().to_string(),
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SignInForm {
    pub username: String,
    pub password: String,
}

impl SignInForm {
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();
        if self.username.trim().is_empty() {
            errors.push("Please enter your username".to_string());
        } else if self.username.trim().chars().count() < 3 {
            errors.push("Username must be at least 3 characters".to_string());
        }
        if self.password.is_empty() {
            errors.push("Please enter your password".to_string());
        } else if self.password.chars().count() < 6 {
            errors.push("Password must be at least 6 characters".to_string());
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SignUpForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignUpForm {
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();
        if self.username.trim().chars().count() < 3 {
            errors.push("Username must be at least 3 characters".to_string());
        }
        if !self.email.contains('@') {
            errors.push("Please enter a valid email address".to_string());
        }
        let strength = password_strength(&self.password);
        if self.password.chars().count() < 8 {
            errors.push("Password must be at least 8 characters".to_string());
        } else if strength.percent() < 60 {
            errors.push("Password is too weak".to_string());
        }
        if self.confirm_password != self.password {
            errors.push("Passwords do not match".to_string());
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// The five criteria behind the sign-up strength meter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PasswordStrength {
    pub length: bool,
    pub uppercase: bool,
    pub lowercase: bool,
    pub number: bool,
    pub special: bool,
}

impl PasswordStrength {
    pub fn percent(&self) -> u8 {
        let met = [
            self.length,
            self.uppercase,
            self.lowercase,
            self.number,
            self.special,
        ]
        .iter()
        .filter(|ok| **ok)
        .count() as u8;
        met * 20
    }

    pub fn label(&self) -> &'static str {
        match self.percent() {
            0..=39 => "Weak",
            40..=79 => "Medium",
            _ => "Strong",
        }
    }
}

pub fn password_strength(password: &str) -> PasswordStrength {
    if password.is_empty() {
        return PasswordStrength::default();
    }
    PasswordStrength {
        length: password.chars().count() >= 8,
        uppercase: password.chars().any(|ch| ch.is_ascii_uppercase()),
        lowercase: password.chars().any(|ch| ch.is_ascii_lowercase()),
        number: password.chars().any(|ch| ch.is_ascii_digit()),
        special: password.chars().any(|ch| "!@#$%^&*(),.?\":{}|<>".contains(ch)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_form_blocks_submission_when_required_fields_empty() {
        let form = BookForm {
            title: "Dune".into(),
            author: String::new(),
            description: "Sand.".into(),
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors, vec!["Please input author".to_string()]);
    }

    #[test]
    fn test_book_form_rejects_oversized_description() {
        let form = BookForm {
            title: "Dune".into(),
            author: "Frank Herbert".into(),
            description: "x".repeat(501),
        };
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_book_form_trims_fields_into_payload() {
        let form = BookForm {
            title: " Dune ".into(),
            author: "Frank Herbert".into(),
            description: "Sand.".into(),
        };
        let payload = form.validate().unwrap();
        assert_eq!(payload.product_title, "Dune");
    }

    #[test]
    fn test_review_form_defaults_to_five_stars() {
        let form = ReviewForm {
            reviewer: "Ann".into(),
            comment: "Great".into(),
            ..ReviewForm::default()
        };
        let review = form.validate(3).unwrap();
        assert_eq!(review.rating, Some(5));
        assert_eq!(review.book_id, 3);
    }

    #[test]
    fn test_write_review_form_requires_numeric_book_id() {
        let form = WriteReviewForm {
            book_id: "abc".into(),
            reviewer: "Ann".into(),
            comment: "Great".into(),
        };
        assert!(form.validate().is_err());

        let form = WriteReviewForm {
            book_id: "3".into(),
            ..form
        };
        let review = form.validate().unwrap();
        assert_eq!(review.book_id, 3);
        assert_eq!(review.rating, None);
    }

    #[test]
    fn test_recommendation_form_enforces_description_window() {
        let mut form = RecommendationForm {
            book_name: "Atomic Habits".into(),
            author: "James Clear".into(),
            rating: Some(5),
            description: "too short".into(),
        };
        assert!(form.validate().is_err());

        form.description = "This one genuinely changed how I build routines.".into();
        let body = form.validate().unwrap();
        assert_eq!(body.rating, Some(5.0));
    }

    #[test]
    fn test_sign_in_form_length_rules() {
        let form = SignInForm {
            username: "ab".into(),
            password: "secret".into(),
        };
        assert!(form.validate().is_err());

        let form = SignInForm {
            username: "admin".into(),
            password: "secret".into(),
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_sign_up_form_requires_matching_strong_password() {
        let form = SignUpForm {
            username: "reader".into(),
            email: "reader@example.com".into(),
            password: "Str0ng!pass".into(),
            confirm_password: "Str0ng!pass".into(),
        };
        assert!(form.validate().is_ok());

        let mismatched = SignUpForm {
            confirm_password: "different".into(),
            ..form.clone()
        };
        assert!(mismatched.validate().is_err());

        let weak = SignUpForm {
            password: "aaaaaaaa".into(),
            confirm_password: "aaaaaaaa".into(),
            ..form
        };
        assert!(weak.validate().is_err());
    }

    #[test]
    fn test_password_strength_scoring() {
        assert_eq!(password_strength("").percent(), 0);
        assert_eq!(password_strength("abc").percent(), 20);
        let strong = password_strength("Str0ng!pass");
        assert_eq!(strong.percent(), 100);
        assert_eq!(strong.label(), "Strong");
    }
}
