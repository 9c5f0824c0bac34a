//! Pure conversions between [`EmployeeRecord`] and [`EmployeeDto`].

use super::employee::{EmployeeDto, EmployeeRecord};

/// Convert a transfer object into a record, copying every field.
pub fn to_record(dto: EmployeeDto) -> EmployeeRecord {
    EmployeeRecord {
        id: dto.id,
        first_name: dto.first_name,
        last_name: dto.last_name,
        email: dto.email,
    }
}

/// Convert a record into a transfer object, copying every field.
pub fn to_dto(record: EmployeeRecord) -> EmployeeDto {
    EmployeeDto {
        id: record.id,
        first_name: record.first_name,
        last_name: record.last_name,
        email: record.email,
    }
}
