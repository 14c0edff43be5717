use super::normalizer::normalize_header;
use crate::workflows::eligibility::Field;
use std::collections::HashMap;
use std::sync::OnceLock;

static HEADER_MAP: OnceLock<HashMap<String, Field>> = OnceLock::new();

pub(crate) fn field_for_header(header: &str) -> Option<Field> {
    header_map().get(&normalize_header(header)).copied()
}

fn header_map() -> &'static HashMap<String, Field> {
    HEADER_MAP.get_or_init(|| {
        const HEADER_TO_FIELD: &[(&str, Field)] = &[
            ("Nome", Field::Name),
            ("Name", Field::Name),
            ("CPF", Field::IdentityNumber),
            ("Identity Number", Field::IdentityNumber),
            ("RG", Field::IdentityDocument),
            ("Identity Document", Field::IdentityDocument),
            ("Horas_Trator", Field::ActivityHours),
            ("Horas Trator", Field::ActivityHours),
            ("Activity Hours", Field::ActivityHours),
            ("Hours", Field::ActivityHours),
            ("Idade", Field::Age),
            ("Age", Field::Age),
            ("Localidade", Field::Locality),
            ("Locality", Field::Locality),
            ("Email", Field::Email),
            ("E-mail", Field::Email),
        ];

        HEADER_TO_FIELD
            .iter()
            .map(|(header, field)| (normalize_header(header), *field))
            .collect()
    })
}

#[cfg(test)]
pub(crate) fn lookup_for_tests(header: &str) -> Option<Field> {
    field_for_header(header)
}
