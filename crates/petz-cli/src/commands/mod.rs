//! Command implementations.

pub mod pedigree;
pub mod profile;

pub use self::pedigree::execute_pedigree;
pub use self::profile::execute_profile;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{PedigreeArgs, ProfileArgs};
    use crate::error::CliError;
    use crate::output::{Formatter, OutputFormat};
    use petz_domain::{AnimalId, AnimalRecord, GameVersion, PetStatus, Sex};
    use petz_lineage::{LineageConfig, LineageError, PetService};
    use petz_store::SqliteStore;
    use std::sync::{Arc, Mutex};

    fn animal(id: i64, sex: Sex, sire: Option<i64>, dam: Option<i64>) -> AnimalRecord {
        AnimalRecord {
            id: AnimalId::from_value(id),
            show_name: format!("Pet {}", id),
            partial_show_name: format!("Pet {}", id),
            call_name: format!("pet{}", id),
            pedigree_number: None,
            registration_date: None,
            registrar_id: None,
            age: 1,
            sex,
            game_version: GameVersion::Petz3,
            status: PetStatus::Registered,
            sire_id: sire.map(AnimalId::from_value),
            dam_id: dam.map(AnimalId::from_value),
            affix_id: None,
            breed_id: 1,
            owner_id: 1,
            breeder_id: None,
            created_at: 0,
            added_by: None,
            last_modified_at: None,
            modified_by: None,
        }
    }

    fn create_test_service() -> PetService<SqliteStore> {
        let mut store = SqliteStore::new(":memory:").unwrap();
        store.insert_animal(&animal(2, Sex::Male, None, None)).unwrap();
        store.insert_animal(&animal(3, Sex::Female, None, None)).unwrap();
        store.insert_animal(&animal(1, Sex::Female, Some(2), Some(3))).unwrap();
        PetService::new(Arc::new(Mutex::new(store)), LineageConfig::default()).unwrap()
    }

    #[test]
    fn test_profile_command() {
        let service = create_test_service();
        let formatter = Formatter::new(OutputFormat::Json, false);
        execute_profile(ProfileArgs { id: 1 }, &service, &formatter).unwrap();
    }

    #[test]
    fn test_profile_command_unknown_pet() {
        let service = create_test_service();
        let formatter = Formatter::new(OutputFormat::Table, false);
        let result = execute_profile(ProfileArgs { id: 99 }, &service, &formatter);
        assert!(matches!(result, Err(CliError::Lineage(LineageError::NotFound(_)))));
    }

    #[test]
    fn test_pedigree_command_rejects_excess_depth() {
        let service = create_test_service();
        let formatter = Formatter::new(OutputFormat::Table, false);
        let args = PedigreeArgs {
            id: 1,
            generations: 40,
        };
        let result = execute_pedigree(args, &service, &formatter);
        assert!(matches!(
            result,
            Err(CliError::Lineage(LineageError::InvalidArgument(_)))
        ));
    }

    #[test]
    fn test_pedigree_command() {
        let service = create_test_service();
        let formatter = Formatter::new(OutputFormat::Table, false);
        let args = PedigreeArgs {
            id: 1,
            generations: 2,
        };
        execute_pedigree(args, &service, &formatter).unwrap();
    }
}
