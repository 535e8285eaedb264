use uuid::Uuid;

pub mod app_role_assignment_id;
pub mod app_role_id;
pub mod assignment_id;
pub mod principal_object_id;
pub mod resource_object_id;

/// Directory object ids are only accepted in the 36 character hyphenated form, unpadded.
pub(crate) fn parse_hyphenated_uuid(value: &str) -> Option<Uuid> {
    if value.len() != 36 {
        return None;
    }
    Uuid::try_parse(value).ok()
}
