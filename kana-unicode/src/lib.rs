/*!
Small Unicode scalar utilities shared by the Hepburn name checker.

## Features
- [`kana`] range tests for the hiragana/katakana blocks and the
  prolonged-sound mark, and the fold from katakana to hiragana.
*/
pub mod kana;
