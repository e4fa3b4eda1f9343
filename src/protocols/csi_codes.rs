// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! CSI final-byte constants, one per row of spec §4.E's dispatch table.

pub const CUU_CURSOR_UP: char = 'A';
pub const CUD_CURSOR_DOWN: char = 'B';
pub const CUD_CURSOR_DOWN_ALT: char = 'e';
pub const CUF_CURSOR_FORWARD: char = 'C';
pub const CUF_CURSOR_FORWARD_ALT: char = 'a';
pub const CUB_CURSOR_BACKWARD: char = 'D';
pub const CNL_CURSOR_NEXT_LINE: char = 'E';
pub const CPL_CURSOR_PREV_LINE: char = 'F';
pub const CHA_CURSOR_COLUMN: char = 'G';
pub const CHA_CURSOR_COLUMN_ALT: char = '`';
pub const VPA_VERTICAL_POSITION: char = 'd';
pub const CUP_CURSOR_POSITION: char = 'H';
pub const HVP_CURSOR_POSITION: char = 'f';
pub const ED_ERASE_DISPLAY: char = 'J';
pub const EL_ERASE_LINE: char = 'K';
pub const ICH_INSERT_CHAR: char = '@';
pub const DCH_DELETE_CHAR: char = 'P';
pub const IL_INSERT_LINE: char = 'L';
pub const DL_DELETE_LINE: char = 'M';
pub const ECH_ERASE_CHAR: char = 'X';
pub const SU_SCROLL_UP: char = 'S';
pub const SD_SCROLL_DOWN: char = 'T';
pub const CBT_CURSOR_BACKTAB: char = 'Z';
pub const REP_REPEAT_LAST_CHAR: char = 'b';
pub const DECSTBM_SET_MARGINS: char = 'r';
pub const SCP_SAVE_CURSOR: char = 's';
pub const RCP_RESTORE_CURSOR: char = 'u';
pub const SGR_SET_GRAPHICS: char = 'm';
pub const SM_SET_MODE: char = 'h';
pub const RM_RESET_MODE: char = 'l';

/// CSI private-mode sequences (`ESC [ ? n h` / `ESC [ ? n l`) carry this
/// intermediate byte ahead of the parameter list; `vte` surfaces it via
/// `intermediates`.
pub const PRIVATE_MODE_INTERMEDIATE: u8 = b'?';
