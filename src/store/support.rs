/// A help-centre question with its answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: [Faq; 6] = [
    Faq {
        question: "How do I track my order?",
        answer: "You can track your order status from the 'My Account' page. Once your order has shipped, you will receive an email with a tracking number and a link to the carrier's website.",
    },
    Faq {
        question: "What is your return policy?",
        answer: "We offer a 30-day return policy for most items. The item must be in its original condition and packaging. To initiate a return, please visit the 'Order History' section in your account and select the order you wish to return.",
    },
    Faq {
        question: "How can I change my shipping address?",
        answer: "If your order has not yet shipped, you can update your shipping address from the 'My Account' page. If the order is already in transit, please contact customer support for assistance.",
    },
    Faq {
        question: "What payment methods do you accept?",
        answer: "We accept all major credit cards (Visa, MasterCard, American Express), PayPal, and Nexora gift cards. All transactions are secure and encrypted.",
    },
    Faq {
        question: "How long does shipping take?",
        answer: "Standard shipping typically takes 3-5 business days. We also offer expedited 2-day shipping and overnight shipping options at checkout for an additional fee.",
    },
    Faq {
        question: "Do you ship internationally?",
        answer: "Yes, we ship to over 100 countries worldwide. International shipping rates and times vary by destination. Please proceed to checkout to see the available options for your location.",
    },
];

/// Case-insensitive substring search over questions and answers.
/// A blank term returns every FAQ.
pub fn search_faqs(term: &str) -> Vec<&'static Faq> {
    let needle = term.trim().to_lowercase();
    FAQS.iter()
        .filter(|faq| {
            needle.is_empty()
                || faq.question.to_lowercase().contains(&needle)
                || faq.answer.to_lowercase().contains(&needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_term_returns_all() {
        assert_eq!(search_faqs("").len(), 6);
        assert_eq!(search_faqs("   ").len(), 6);
    }

    #[test]
    fn test_matches_question_or_answer() {
        let hits = search_faqs("SHIPPING");
        let questions: Vec<_> = hits.iter().map(|f| f.question).collect();
        assert_eq!(
            questions,
            vec![
                "How can I change my shipping address?",
                "How long does shipping take?",
                "Do you ship internationally?",
            ]
        );

        let hits = search_faqs("paypal");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].question, "What payment methods do you accept?");

        assert!(search_faqs("warranty").is_empty());
    }
}
