#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    Success = 0,
    GeneralError = 1,
    InvalidArguments = 2,
    DirectoryNotFound = 3,
    InvalidShowName = 4,
    StructureError = 5,
    MisnamedEpisode = 6,
    Collision = 7,
    PermissionError = 8,
    RenameError = 9,
    HistoryError = 10,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}
